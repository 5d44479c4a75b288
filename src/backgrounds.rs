// ABOUTME: Background image selection per theme and heading level
// ABOUTME: Custom backgrounds from front matter replace the theme defaults

use crate::detect::HeadingLevel;
use crate::metadata::Metadata;
use crate::slide::Slide;
use serde::{Deserialize, Serialize};

/// Background images keyed by heading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeBackgrounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ThemeBackgrounds {
    fn for_level(&self, level: HeadingLevel) -> Option<&str> {
        match level {
            HeadingLevel::H1 => self.h1.as_deref(),
            HeadingLevel::H2 => self.h2.as_deref(),
            HeadingLevel::H3 => self.h3.as_deref(),
            _ => None,
        }
    }
}

/// Built-in backgrounds of a theme, `None` for unknown themes.
pub fn theme_backgrounds(theme: &str) -> Option<ThemeBackgrounds> {
    match theme {
        "dsfr" => Some(ThemeBackgrounds {
            h1: Some("/backgrounds/slide-bg-default.png".to_string()),
            h2: Some("/backgrounds/slide-bg-contrast.png".to_string()),
            h3: Some("/backgrounds/slide-bg-subtle.png".to_string()),
            default: None,
        }),
        "minimal" => Some(ThemeBackgrounds::default()),
        _ => None,
    }
}

/// Pick the background image for a slide.
///
/// `custom` takes the place of the theme table when supplied. A match on
/// the heading level wins, then the `default` entry.
pub fn slide_background(
    theme: &str,
    level: Option<HeadingLevel>,
    custom: Option<&ThemeBackgrounds>,
) -> Option<String> {
    let builtin;
    let backgrounds = match custom {
        Some(custom) => custom,
        None => {
            builtin = theme_backgrounds(theme)?;
            &builtin
        }
    };

    level
        .and_then(|level| backgrounds.for_level(level))
        .or(backgrounds.default.as_deref())
        .map(str::to_string)
}

/// Set `background_image` on every slide and vertical sub-slide.
///
/// Sub-slides with no background of their own inherit their parent's.
pub fn attach_backgrounds<'a>(slides: Vec<Slide<'a>>, metadata: &Metadata) -> Vec<Slide<'a>> {
    slides
        .into_iter()
        .map(|slide| with_background(slide, metadata, None))
        .collect()
}

fn with_background<'a>(
    mut slide: Slide<'a>,
    metadata: &Metadata,
    inherited: Option<&str>,
) -> Slide<'a> {
    let background = slide_background(
        metadata.theme(),
        slide.heading_level,
        metadata.backgrounds.as_ref(),
    )
    .or_else(|| inherited.map(str::to_string));

    if let Some(verticals) = slide.vertical_slides.take() {
        slide.vertical_slides = Some(
            verticals
                .into_iter()
                .map(|sub| with_background(sub, metadata, background.as_deref()))
                .collect(),
        );
    }

    slide.background_image = background;
    slide
}
