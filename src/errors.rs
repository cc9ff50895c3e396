use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoundryError {
    #[error("provider error: {0}")] Provider(String),
    #[error("config error: {0}")] Config(String),
}
