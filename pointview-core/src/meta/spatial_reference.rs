use std::fmt::Display;

/// The coordinate reference system of a point view, as text. Both representations are stored exactly as they were
/// supplied (usually by the pipeline engine that produced the point view), this type does not derive one from the
/// other. A missing representation reads as the empty string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialReference {
    wkt: Option<String>,
    proj4: Option<String>,
}

impl SpatialReference {
    /// Creates a new `SpatialReference` with both textual representations
    pub fn new<W: Into<String>, P: Into<String>>(wkt: W, proj4: P) -> Self {
        Self {
            wkt: Some(wkt.into()),
            proj4: Some(proj4.into()),
        }
    }

    /// Creates a new `SpatialReference` that only has a WKT representation
    /// ```
    /// # use pointview_core::meta::SpatialReference;
    /// let srs = SpatialReference::from_wkt("GEOGCS[\"WGS 84\"]");
    /// assert_eq!("GEOGCS[\"WGS 84\"]", srs.wkt());
    /// assert_eq!("", srs.proj4());
    /// ```
    pub fn from_wkt<W: Into<String>>(wkt: W) -> Self {
        Self {
            wkt: Some(wkt.into()),
            proj4: None,
        }
    }

    /// Creates a new `SpatialReference` that only has a proj4 representation
    pub fn from_proj4<P: Into<String>>(proj4: P) -> Self {
        Self {
            wkt: None,
            proj4: Some(proj4.into()),
        }
    }

    /// Returns the WKT representation, or an empty string if there is none
    pub fn wkt(&self) -> &str {
        self.wkt.as_deref().unwrap_or_default()
    }

    /// Returns the proj4 representation, or an empty string if there is none
    pub fn proj4(&self) -> &str {
        self.proj4.as_deref().unwrap_or_default()
    }

    /// Returns true if neither representation is set
    pub fn is_empty(&self) -> bool {
        self.wkt().is_empty() && self.proj4().is_empty()
    }
}

impl Display for SpatialReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.wkt().is_empty() {
            write!(f, "{}", self.wkt())
        } else {
            write!(f, "{}", self.proj4())
        }
    }
}
