// src/config/consts.rs

// Sources (listing URL prefixes; the page number is appended)
pub const NTIS_LIST: &str = "https://www.ntis.go.kr/rndgate/eg/un/ra/mng.do?pageIndex=";
pub const SMTECH_LIST: &str = "https://www.smtech.go.kr/front/ifg/no/notice02_list.do?pageIndex=";
pub const NIA_LIST: &str = "https://nia.or.kr/site/nia_kor/ex/bbs/List.do?cbIdx=78336&pageIndex=";
pub const KOITA_LIST: &str = "https://www.koita.or.kr/board/commBoardNotice003List.do?page=";
pub const KOITA_VIEW: &str = "https://www.koita.or.kr/board/commBoardNotice003View.do?page=";

// Pagination (inclusive page ranges)
pub const NTIS_PAGES: u32 = 10;
pub const SMTECH_PAGES: u32 = 10;
pub const NIA_PAGES: u32 = 3;
pub const KOITA_PAGES: u32 = 2;
pub const KOITA_MAX_ITEMS: usize = 20;

// Net
pub const REQUEST_PAUSE_MS: u64 = 100; // be polite
pub const TIMEOUT_SECS: u64 = 15;

// Range separator used by every source for "start~end"
pub const RANGE_SEP: char = '~';

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_FILE: &str = "announcements";
pub const HEADERS: [&str; 4] = ["site", "title", "deadline", "status"];

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "warn,notice_scrape=debug";
