pub mod countries_view;
pub mod details_view;

pub use countries_view::CountriesView;
pub use details_view::DetailsView;
