//! Business logic services

pub mod books;
pub mod pager;

use crate::{config::ViewConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub pager: pager::PagerService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, view_config: ViewConfig) -> Self {
        Self {
            books: books::BooksService::new(repository),
            pager: pager::PagerService::new(view_config.default_page_size),
        }
    }
}
