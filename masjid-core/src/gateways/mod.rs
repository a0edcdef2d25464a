pub mod mosque;
