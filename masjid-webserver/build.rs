use std::{env, process::Command};

use walkdir::WalkDir;

const FRONTEND_DIR: &str = "../masjid-frontend";
const FRONTEND_INPUTS: &[&str] = &["index.html", "style.css", "Cargo.toml", "src"];

fn main() {
    // The embedded map key is compiled into the frontend.
    println!("cargo:rerun-if-env-changed=MASJID_MAPS_EMBED_KEY");

    if env::var_os("CARGO_FEATURE_FRONTEND").is_none() {
        return;
    }

    for input in FRONTEND_INPUTS {
        for entry in WalkDir::new(format!("{FRONTEND_DIR}/{input}"))
            .into_iter()
            .filter_map(Result::ok)
        {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    match Command::new("trunk")
        .args(["build", "--release"])
        .current_dir(FRONTEND_DIR)
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => panic!("Unable to build the frontend app: trunk exited with {status}"),
        Err(err) => panic!("Unable to run trunk, install it with `cargo install trunk`: {err}"),
    }
}
