//! Page routes of the front-end
//!
//! A static path table for the two audiences. Resolution is pure: no
//! guards and no state.
//!
//! | Path | Name | Audience |
//! |------|------|----------|
//! | `/` | home | Customer |
//! | `/queue` | queue | Customer |
//! | `/restaurant/:id/table` | seat-map | Restaurant |

use std::fmt;

/// Who a page is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Customer,
    Restaurant,
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub name: &'static str,
    pub audience: Audience,
}

/// Every route, in match order
pub const ROUTES: &[PageRoute] = &[
    PageRoute {
        path: "/",
        name: "home",
        audience: Audience::Customer,
    },
    PageRoute {
        path: "/queue",
        name: "queue",
        audience: Audience::Customer,
    },
    PageRoute {
        path: "/restaurant/:id/table",
        name: "seat-map",
        audience: Audience::Restaurant,
    },
];

/// A resolved page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Restaurant map and list
    Home,
    /// The customer's ticket
    Queue,
    /// Staff seat map of one restaurant
    SeatMap { restaurant_id: i64 },
}

impl Page {
    pub fn route(&self) -> &'static PageRoute {
        match self {
            Page::Home => &ROUTES[0],
            Page::Queue => &ROUTES[1],
            Page::SeatMap { .. } => &ROUTES[2],
        }
    }

    pub fn name(&self) -> &'static str {
        self.route().name
    }

    pub fn audience(&self) -> Audience {
        self.route().audience
    }

    /// URL path of the page
    pub fn path(&self) -> String {
        match self {
            Page::SeatMap { restaurant_id } => format!("/restaurant/{}/table", restaurant_id),
            other => other.route().path.to_string(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Match a URL path against [`ROUTES`]
///
/// The query string, fragment and a trailing slash are ignored.
pub fn resolve(path: &str) -> Option<Page> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Some(Page::Home),
        ["queue"] => Some(Page::Queue),
        ["restaurant", id, "table"] => id
            .parse()
            .ok()
            .map(|restaurant_id| Page::SeatMap { restaurant_id }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_customer_pages() {
        assert_eq!(resolve("/"), Some(Page::Home));
        assert_eq!(resolve(""), Some(Page::Home));
        assert_eq!(resolve("/queue"), Some(Page::Queue));
        assert_eq!(resolve("/queue/?tab=1"), Some(Page::Queue));
    }

    #[test]
    fn test_resolve_seat_map() {
        let page = resolve("/restaurant/3/table").unwrap();
        assert_eq!(page, Page::SeatMap { restaurant_id: 3 });
        assert_eq!(page.name(), "seat-map");
        assert_eq!(page.audience(), Audience::Restaurant);
        assert_eq!(page.path(), "/restaurant/3/table");
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("/restaurant/abc/table"), None);
        assert_eq!(resolve("/restaurant/3"), None);
        assert_eq!(resolve("/admin"), None);
    }

    #[test]
    fn test_every_route_round_trips() {
        for page in [Page::Home, Page::Queue, Page::SeatMap { restaurant_id: 12 }] {
            assert_eq!(resolve(&page.path()), Some(page));
        }
    }
}
