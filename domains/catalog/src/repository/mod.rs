pub mod leagues;
pub mod teams;

pub use leagues::LeagueRepository;
pub use teams::TeamRepository;
