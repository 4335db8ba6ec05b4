mod asset;
mod portfolio;
mod user;

pub use asset::{Asset, AssetInput, AssetView};
pub use portfolio::PortfolioSeries;
pub use user::{
    AccountDeleted, AuthResponse, LoginRequest, PasswordChangeRequest, RegisterRequest, User,
    UserSettings, UserSummary,
};
