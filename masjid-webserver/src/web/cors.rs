use rocket::{
    fairing::{Fairing, Info, Kind},
    http::Header,
    Request, Response,
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Adds permissive CORS headers to every response,
/// including error responses and pre-flight requests.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _: &'r Request<'_>, res: &mut Response<'r>) {
        res.set_header(Header::new("Access-Control-Allow-Origin", ALLOW_ORIGIN));
        res.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
        res.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
    }
}
