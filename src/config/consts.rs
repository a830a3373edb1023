// src/config/consts.rs

// Rank endpoint
pub const RANK_URL: &str = "https://www.dongchedi.com/motor/pc/car/rank_data";
pub const RANK_AID: u32 = 1839;
pub const RANK_DATA_TYPE: u32 = 11;
pub const RANK_COUNT: u32 = 10;
pub const RANK_OFFSET: u32 = 0;

// Review pages
pub const REVIEW_BASE_URL: &str = "https://www.walmart.com/reviews/product";
pub const REVIEW_ENTRY_POINT: &str = "viewAllReviewsBottom";
pub const PRODUCT_ID: &str = "432328045";
pub const PAGE_COUNT: u32 = 3;

// Render service (rendered-HTML fetches go through here)
pub const RENDER_API_URL: &str = "https://api.firecrawl.dev/v1/scrape";
pub const RENDER_KEY_VAR: &str = "FIRECRAWL_API_KEY";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
pub const USER_AGENT: &str = "wm_scrape/0.2";
