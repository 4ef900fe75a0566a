use crate::motion::progress::{ProgressConfig, VisualPolicy};
use crate::motion::snapper::SnapConfig;

pub const MANIFEST_PATH: &str = "board_data.json";
pub const UPLOADS_PREFIX: &str = "uploads/";

pub const MSG_LOADING: &str = "자료를 불러오는 중...";
pub const MSG_EMPTY: &str = "등록된 자료가 없습니다.";
pub const MSG_LOAD_FAILED: &str = "자료를 불러오는데 실패했습니다.";

pub const FADE_UP_SELECTOR: &str = ".fade-up";
pub const VISIBLE_CLASS: &str = "visible";
/// Delay before freshly rendered board rows get [`VISIBLE_CLASS`].
pub const REVEAL_DELAY_MS: u32 = 50;
pub const FADE_UP_THRESHOLD: f64 = 0.1;

pub const NAV_HEIGHT: f64 = 64.0;
/// Scroll distance of a showcase, in viewport heights. The snapper lands
/// where this distance ends.
pub const SHOWCASE_SPAN_VH: f64 = 1.5;

pub const SHOWCASE_SECTIONS: &[&str] = &["showcase-concept", "showcase-practice"];
pub const SHOWCASE_VISUAL_SELECTOR: &str = ".showcase-visual";

pub const HERO_PROGRESS: ProgressConfig = ProgressConfig {
    span_vh: SHOWCASE_SPAN_VH,
    nav_height: NAV_HEIGHT,
    policy: VisualPolicy::SCALE_PAN,
};

pub const INTRO_PROGRESS: ProgressConfig = ProgressConfig {
    span_vh: SHOWCASE_SPAN_VH,
    nav_height: NAV_HEIGHT,
    policy: VisualPolicy::OPACITY_SCALE,
};

pub const SNAP: SnapConfig = SnapConfig {
    trigger_guard: 10.0,
    landing_guard: 50.0,
    duration_ms: 1200.0,
    throttle_ms: 50,
    nav_height: NAV_HEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseLinks {
    pub kyobo: &'static str,
    pub yes24: &'static str,
    pub aladin: &'static str,
}

impl PurchaseLinks {
    pub fn as_array(&self) -> [&'static str; 3] {
        [self.kyobo, self.yes24, self.aladin]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEdition {
    pub key: &'static str,
    pub title: &'static str,
    pub links: PurchaseLinks,
}

pub const BOOK_EDITIONS: &[BookEdition] = &[
    BookEdition {
        key: "concept",
        title: "개념편",
        links: PurchaseLinks {
            kyobo: "https://search.kyobobook.co.kr/search?keyword=%EA%B0%9C%EB%85%90%ED%8E%B8",
            yes24: "https://www.yes24.com/Product/Search?query=%EA%B0%9C%EB%85%90%ED%8E%B8",
            aladin: "https://www.aladin.co.kr/search/wsearchresult.aspx?SearchWord=%EA%B0%9C%EB%85%90%ED%8E%B8",
        },
    },
    BookEdition {
        key: "practice",
        title: "실전편",
        links: PurchaseLinks {
            kyobo: "https://search.kyobobook.co.kr/search?keyword=%EC%8B%A4%EC%A0%84%ED%8E%B8",
            yes24: "https://www.yes24.com/Product/Search?query=%EC%8B%A4%EC%A0%84%ED%8E%B8",
            aladin: "https://www.aladin.co.kr/search/wsearchresult.aspx?SearchWord=%EC%8B%A4%EC%A0%84%ED%8E%B8",
        },
    },
];

pub fn book_edition(key: &str) -> Option<&'static BookEdition> {
    BOOK_EDITIONS.iter().find(|edition| edition.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_has_its_three_links() {
        let edition = book_edition("concept").expect("concept edition");
        assert_eq!(
            edition.links.as_array(),
            [
                "https://search.kyobobook.co.kr/search?keyword=%EA%B0%9C%EB%85%90%ED%8E%B8",
                "https://www.yes24.com/Product/Search?query=%EA%B0%9C%EB%85%90%ED%8E%B8",
                "https://www.aladin.co.kr/search/wsearchresult.aspx?SearchWord=%EA%B0%9C%EB%85%90%ED%8E%B8",
            ]
        );
    }

    #[test]
    fn unknown_edition_is_none() {
        assert!(book_edition("workbook").is_none());
        assert!(book_edition("").is_none());
    }

    #[test]
    fn snap_span_matches_showcase_span() {
        assert_eq!(HERO_PROGRESS.span_vh, SHOWCASE_SPAN_VH);
        assert_eq!(SNAP.nav_height, HERO_PROGRESS.nav_height);
        assert!(SNAP.trigger_guard < SNAP.landing_guard);
    }
}
