//! DOM contract of the page: element ids, class names and attributes.

// ── Menu ────────────────────────────────────────────────────────

pub const MENU_ICON_ID: &str = "menu-icon";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const CLOSE_MENU_ID: &str = "close-menu";

/// Class that hides the drawer.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class added to `<body>` while the drawer is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

// ── Video ───────────────────────────────────────────────────────

pub const VIDEO_CONTAINER_ID: &str = "video-container";
pub const VIDEO_SECTION_ID: &str = "video-section";

// ── Cart ────────────────────────────────────────────────────────

pub const CART_SUMMARY_ID: &str = "cart-summary";
pub const CART_ITEMS_ID: &str = "cart-items";
pub const CART_TOTAL_ID: &str = "cart-total";
pub const CHECKOUT_BTN_ID: &str = "checkout-btn";
pub const CLEAR_CART_BTN_ID: &str = "clear-cart-btn";

pub const CARD_SELECTOR: &str = ".card_shop";
pub const CARD_IMAGE_SELECTOR: &str = ".imgBx img";
pub const ADD_TO_CART_CLASS: &str = "add-to-cart-btn";
pub const SELECTED_CLASS: &str = "selected";

pub const SELECTED_SIZE_SELECTOR: &str = ".size span.selected";
pub const FIRST_SIZE_SELECTOR: &str = ".size span[data-size]";
pub const SELECTED_COLOR_SELECTOR: &str = ".color span.selected";
pub const FIRST_COLOR_SELECTOR: &str = ".color span[data-color]";

pub const CART_ITEM_CLASS: &str = "cart-item";
pub const INCREASE_QTY_CLASS: &str = "increase-qty";
pub const DECREASE_QTY_CLASS: &str = "decrease-qty";
pub const REMOVE_ITEM_CLASS: &str = "remove-item";

pub const DATA_SIZE: &str = "data-size";
pub const DATA_COLOR: &str = "data-color";
pub const DATA_PRICE: &str = "data-price";
pub const DATA_SHOE: &str = "data-shoe";
pub const DATA_ID: &str = "data-id";

/// Stashes a button's label while a feedback flash replaces it.
pub const DATA_ORIGINAL_LABEL: &str = "data-original-label";

/// Counter of the newest feedback flash on a button.
pub const DATA_FLASH_GENERATION: &str = "data-flash-generation";

// ── Carousel ────────────────────────────────────────────────────

pub const SERVICES_TRACK_ID: &str = "services-track";
pub const PREV_SERVICE_ID: &str = "prev-service";
pub const NEXT_SERVICE_ID: &str = "next-service";
pub const DOTS_CONTAINER_ID: &str = "dots-container";
pub const WHY_CHOOSE_US_ID: &str = "why-choose-us";

pub const DOT_ACTIVE_CLASSES: &str = "w-3 h-3 rounded-full bg-blue-600 transition-colors duration-300";
pub const DOT_INACTIVE_CLASSES: &str = "w-3 h-3 rounded-full bg-gray-300 hover:bg-gray-400 transition-colors duration-300";

// ── Navigation ──────────────────────────────────────────────────

/// Link text that jumps to the "why choose us" section.
pub const WHY_US_LABEL: &str = "Why Us";
pub const WHY_US_HREF: &str = "#why-choose-us";

/// Elements a "Why Us" click must land inside.
pub const LINK_SELECTOR: &str = "a";
