//! Placement directive vocabulary and parsing.
//!
//! A monitor's `position` field is a directive string of the form
//! `"<direction> <referenceMonitor>"`, e.g. `"right-of main"`. The direction
//! fixes one axis of the monitor's placement; the `align` field resolves the
//! other. Directions and alignments come from small fixed vocabularies and
//! not every combination makes sense:
//!
//! | direction            | axis       | valid alignments          |
//! |----------------------|------------|---------------------------|
//! | `left-of`, `right-of`| horizontal | `top`, `bottom`, `center` |
//! | `above`, `below`     | vertical   | `left`, `right`, `center` |
//!
//! `center` is always accepted, and an unset alignment resolves to `center`.
//! Both vocabularies are modelled as enums so the compiler checks
//! exhaustiveness wherever they are consumed.

use std::fmt;

use thiserror::Error;

/// Errors produced while parsing or validating a placement directive.
#[derive(Debug, Error, PartialEq)]
pub enum DirectiveError {
    /// The position string is not exactly two space-separated tokens.
    #[error("position should be of the form '<direction> <monitor>', got '{position}'")]
    MalformedPosition { position: String },

    /// An alignment was given for a monitor that has no position.
    #[error("position is blank, so alignment must also be blank")]
    AlignmentWithoutPosition,

    /// The direction token is not one of the four known directions.
    #[error("expected direction 'above', 'below', 'left-of', or 'right-of', got '{token}'")]
    UnknownDirection { token: String },

    /// The alignment is not valid for the direction's axis.
    #[error(
        "for direction '{direction}', only alignments {} are valid. got '{alignment}'",
        .direction.valid_alignments()
    )]
    IncompatibleAlignment {
        direction: Direction,
        alignment: String,
    },
}

/// The axis along which a direction displaces a monitor from its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `left-of` / `right-of` — the x coordinate is fixed by the direction.
    Horizontal,
    /// `above` / `below` — the y coordinate is fixed by the direction.
    Vertical,
}

/// The four placement directions a directive may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl Direction {
    /// Parses a direction token.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::UnknownDirection`] for any token outside the
    /// four-value vocabulary.
    pub fn parse(token: &str) -> Result<Self, DirectiveError> {
        match token {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            "left-of" => Ok(Self::LeftOf),
            "right-of" => Ok(Self::RightOf),
            _ => Err(DirectiveError::UnknownDirection {
                token: token.to_string(),
            }),
        }
    }

    /// Classifies the direction by the axis it fixes.
    pub fn axis(self) -> Axis {
        match self {
            Self::LeftOf | Self::RightOf => Axis::Horizontal,
            Self::Above | Self::Below => Axis::Vertical,
        }
    }

    /// The directive token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::LeftOf => "left-of",
            Self::RightOf => "right-of",
        }
    }

    /// Human-readable list of the alignment tokens valid for this direction,
    /// used in error messages.
    fn valid_alignments(&self) -> &'static str {
        match self.axis() {
            Axis::Horizontal => "'top', 'bottom', and 'center'",
            Axis::Vertical => "'left', 'right', and 'center'",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment rules resolving the axis a direction leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Resolves an alignment token against the direction it accompanies.
    ///
    /// An empty token resolves to [`Alignment::Center`], which is the
    /// documented default and valid for every direction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::IncompatibleAlignment`] when the token is not
    /// in the valid set for the direction's axis (horizontal directions take
    /// `top`/`bottom`/`center`, vertical directions take
    /// `left`/`right`/`center`), or is not an alignment token at all.
    pub fn for_direction(token: &str, direction: Direction) -> Result<Self, DirectiveError> {
        let incompatible = || DirectiveError::IncompatibleAlignment {
            direction,
            alignment: token.to_string(),
        };

        let alignment = match token {
            "" | "center" => return Ok(Self::Center),
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => return Err(incompatible()),
        };

        match (direction.axis(), alignment) {
            (Axis::Horizontal, Self::Top | Self::Bottom) => Ok(alignment),
            (Axis::Vertical, Self::Left | Self::Right) => Ok(alignment),
            _ => Err(incompatible()),
        }
    }

    /// The configuration token for this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a position directive into its `(direction, referenceMonitor)`
/// tokens.
///
/// An empty position is not an error: it means the monitor is unpositioned
/// (the layout root), and `Ok(None)` is returned. No semantic validation is
/// performed on either token — the direction vocabulary is checked by
/// [`Direction::parse`] and the reference name by the dependency graph
/// builder.
///
/// # Errors
///
/// Returns [`DirectiveError::MalformedPosition`] when the input is non-empty
/// and not exactly two space-separated tokens.
///
/// # Examples
///
/// ```
/// use screenplan_core::domain::directive::split_position;
///
/// assert_eq!(split_position("right-of main").unwrap(), Some(("right-of", "main")));
/// assert_eq!(split_position("").unwrap(), None);
/// assert!(split_position("right-of").is_err());
/// ```
pub fn split_position(position: &str) -> Result<Option<(&str, &str)>, DirectiveError> {
    if position.is_empty() {
        return Ok(None);
    }

    let mut tokens = position.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(direction), Some(reference), None) => Ok(Some((direction, reference))),
        _ => Err(DirectiveError::MalformedPosition {
            position: position.to_string(),
        }),
    }
}

/// Checks that a direction token and an alignment token agree.
///
/// Both tokens empty is valid (an unpositioned monitor). A blank direction
/// with a non-blank alignment is rejected, then the direction vocabulary and
/// the direction–alignment compatibility table are enforced. Pure and total
/// over any pair of strings.
///
/// # Errors
///
/// Returns [`DirectiveError::AlignmentWithoutPosition`],
/// [`DirectiveError::UnknownDirection`], or
/// [`DirectiveError::IncompatibleAlignment`] accordingly.
///
/// # Examples
///
/// ```
/// use screenplan_core::domain::directive::check_direction_alignment;
///
/// assert!(check_direction_alignment("right-of", "top").is_ok());
/// assert!(check_direction_alignment("right-of", "left").is_err());
/// assert!(check_direction_alignment("", "").is_ok());
/// ```
pub fn check_direction_alignment(direction: &str, alignment: &str) -> Result<(), DirectiveError> {
    if direction.is_empty() {
        return if alignment.is_empty() {
            Ok(())
        } else {
            Err(DirectiveError::AlignmentWithoutPosition)
        };
    }

    let direction = Direction::parse(direction)?;
    Alignment::for_direction(alignment, direction).map(|_| ())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
