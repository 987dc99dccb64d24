//! The fixed set of destinations shown in the navbar.

use icondata::{Icon, LuBookOpen, LuInfo, LuPhone};

/// A navbar destination. Labels and descriptions are translation keys, not
/// display text.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub key: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub desc_key: &'static str,
}

impl NavLink {
    /// Exact match against a locale-stripped pathname.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.href == pathname
    }
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        key: "aboutUs",
        href: "/about",
        icon: LuInfo,
        desc_key: "learnAbout",
    },
    NavLink {
        key: "howToUse",
        href: "/how-to-use",
        icon: LuBookOpen,
        desc_key: "getStarted",
    },
    NavLink {
        key: "contactUs",
        href: "/contact",
        icon: LuPhone,
        desc_key: "reachOut",
    },
];
