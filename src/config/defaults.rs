//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Bilal Ben Aouad".into()
    }

    pub fn description() -> String {
        "Senior Frontend Developer: portfolio, work history and writing on React, \
         TypeScript and web performance."
            .into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "Bilal Ben Aouad".into()
    }

    pub fn email() -> String {
        "bilal.benaouad.me@gmail.com".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod highlight {
        pub fn theme() -> String {
            crate::markdown::DEFAULT_THEME.into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}

// ============================================================================
// [contact] Section Defaults
// ============================================================================

pub mod contact {
    pub fn delay_ms() -> u64 {
        1000
    }
}
