use thiserror::Error;

pub mod commands {
    pub mod delete;
    pub mod init;
    pub mod list;
    pub mod new;
    pub mod show;
}

mod render;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    General(String),
    #[error(transparent)]
    Store(#[from] libswatchbook::Error),
    #[error(transparent)]
    Shades(#[from] libswatchbook::ShadeError),
}
