// Identity of the token in use

use serde::Deserialize;

use crate::{
    binder::{CallBinder, Variables},
    documents,
    error::Result,
};

#[derive(Clone)]
pub struct Viewer {
    binder: CallBinder,
}

impl Viewer {
    pub fn new(binder: CallBinder) -> Self {
        Self { binder }
    }

    /// Username associated with the API token in use
    pub async fn username(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct Data {
            viewer: ViewerData,
        }

        #[derive(Deserialize)]
        struct ViewerData {
            username: String,
        }

        let data: Data = self
            .binder
            .query(&documents::VIEWER, Variables::new())
            .await?;
        Ok(data.viewer.username)
    }
}
