pub mod browse;

pub use browse::{LeagueBrowsePresenter, TeamBrowsePresenter};
