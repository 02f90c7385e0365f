pub mod country_card;
pub mod search_bar;

pub use country_card::CountryCard;
pub use search_bar::SearchBar;
