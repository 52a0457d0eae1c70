mod queries;

use crate::read_model;

#[derive(Clone)]
pub struct Application {
    read_model: read_model::Repository,
}

impl Application {
    pub fn new(read_model: read_model::Repository) -> Self {
        Self { read_model }
    }
}
