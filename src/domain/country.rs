use serde::{Deserialize, Serialize};
use url::Url;

/// A country record as served by the restcountries API with the
/// `name,flags,continents` field selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: CountryName,
    pub flags: Flags,
    #[serde(default)]
    pub continents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    pub png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Country {
    pub fn new(common_name: impl Into<String>, flag_png: impl Into<String>, continents: Vec<String>) -> Self {
        Self {
            name: CountryName {
                common: common_name.into(),
                official: None,
            },
            flags: Flags {
                png: flag_png.into(),
                svg: None,
                alt: None,
            },
            continents,
        }
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// The continent shown on the country card. Only the first entry is displayed.
    pub fn primary_continent(&self) -> Option<&str> {
        self.continents.first().map(String::as_str)
    }

    /// Navigable reference to the details route: `/` followed by the
    /// percent-encoded common name as a single path segment.
    pub fn details_path(&self) -> String {
        details_path_for(&self.name.common)
    }
}

pub fn details_path_for(common_name: &str) -> String {
    // The base is only a vehicle for url's path-segment encoder.
    match Url::parse("http://localhost/") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push(common_name);
            }
            url.path().to_string()
        }
        Err(_) => format!("/{}", common_name),
    }
}
