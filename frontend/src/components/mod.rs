pub mod crop_recommender;
pub mod disease_predictor;
pub mod handlers;
pub mod header;
pub mod markdown;
pub mod preview_area;
pub mod recommendation_form;
pub mod results;
pub mod toasts;
pub mod upload_section;
pub mod utils;
