use super::site::Site;

/// An ordered sequence of sites forming a line string.
///
/// A polyline always has at least two sites, so its start point, end point
/// and boundary segments are well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    sites: Vec<Site>,
}

impl Polyline {
    /// Create a polyline from sites.
    /// If there are fewer than two sites, return None.
    pub fn new(sites: Vec<Site>) -> Option<Self> {
        if sites.len() < 2 {
            return None;
        }
        Some(Self { sites })
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// The first site of the polyline.
    pub fn start(&self) -> Site {
        self.sites[0]
    }

    /// The last site of the polyline.
    pub fn end(&self) -> Site {
        self.sites[self.sites.len() - 1]
    }

    /// The first segment of the polyline, as a (from, to) pair.
    pub fn first_segment(&self) -> (Site, Site) {
        (self.sites[0], self.sites[1])
    }

    /// The last segment of the polyline, as a (from, to) pair.
    pub fn last_segment(&self) -> (Site, Site) {
        (self.sites[self.sites.len() - 2], self.sites[self.sites.len() - 1])
    }
}
