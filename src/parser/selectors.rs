//! Every CSS selector the extractors rely on, in one place. Zillow's
//! generated class names shift between deploys, so anything matched by
//! class is matched by substring; when the markup changes, only the
//! constant here needs updating.

use std::sync::LazyLock;

use scraper::Selector;

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

pub static STATS_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| sel("dl[class*='StyledOverviewStats']"));
pub static STATS_EMPHASIS: LazyLock<Selector> = LazyLock::new(|| sel("strong"));

pub static CATEGORY_GROUP: LazyLock<Selector> =
    LazyLock::new(|| sel("div[data-testid='category-group']"));
pub static GROUP_HEADING: LazyLock<Selector> =
    LazyLock::new(|| sel("h3[class*='StyledCategoryGroupHeading']"));
pub static FACT_CATEGORY: LazyLock<Selector> =
    LazyLock::new(|| sel("div[data-testid='fact-category']"));
pub static CATEGORY_HEADING: LazyLock<Selector> =
    LazyLock::new(|| sel("h6[class*='StyledHeading']"));
pub static FACT_ITEM: LazyLock<Selector> = LazyLock::new(|| sel("li"));

pub static ADDRESS_WRAPPER: LazyLock<Selector> =
    LazyLock::new(|| sel("div[class*='AddressWrapper']"));

pub static MEDIA_TILE: LazyLock<Selector> = LazyLock::new(|| sel("li.media-stream-tile"));
pub static MEDIA_IMG: LazyLock<Selector> = LazyLock::new(|| sel("img"));

pub static CANONICAL_LINK: LazyLock<Selector> = LazyLock::new(|| sel("link[rel='canonical']"));

pub static MLS_INFO: LazyLock<Selector> =
    LazyLock::new(|| sel("div[aria-label='MLS information']"));
pub static MLS_LAST_UPDATED: LazyLock<Selector> =
    LazyLock::new(|| sel("p[data-testid='current-list-attribution-last-updated']"));
pub static SELLER_ATTRIBUTION: LazyLock<Selector> =
    LazyLock::new(|| sel("div[data-testid='seller-attribution']"));
pub static LISTING_AGENT: LazyLock<Selector> =
    LazyLock::new(|| sel("p[data-testid='attribution-LISTING_AGENT']"));
pub static LISTING_BROKER: LazyLock<Selector> =
    LazyLock::new(|| sel("p[data-testid='attribution-BROKER']"));
pub static SOURCE_SPACER: LazyLock<Selector> = LazyLock::new(|| sel("div[class*='Spacer']"));
pub static SOURCE_SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
