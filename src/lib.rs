pub mod cli {
    pub mod parser;
}
pub mod config;
pub mod credentials;
pub mod digest;
pub mod github {
    pub mod fetch;
    pub mod pulls;
}
pub mod mailer;
pub mod output;
pub mod run;
pub mod summary;
