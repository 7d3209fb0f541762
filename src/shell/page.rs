use std::str::FromStr;

use crate::error::AppError;
use crate::views::NavEntry;

/// Screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Fecha,
    Estudiantes,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Fecha, Page::Estudiantes];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Fecha => "fecha",
            Page::Estudiantes => "estudiantes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Fecha => "Registros por fecha",
            Page::Estudiantes => "Estudiantes",
        }
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or(AppError::NotFound)
    }
}

pub fn nav() -> Vec<NavEntry> {
    Page::ALL
        .into_iter()
        .map(|page| NavEntry {
            slug: page.slug(),
            title: page.title(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
        assert!("admin".parse::<Page>().is_err());
    }
}
