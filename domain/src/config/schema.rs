//! Declarative settings schema
//!
//! A [`Schema`] is an ordered list of [`SectionDescriptor`]s, each an
//! ordered list of [`FieldDescriptor`]s. A field binds one key to a
//! [`FieldKind`] that knows how to validate the raw value and where to
//! store it in the settings record `S`.
//!
//! Adding a setting means adding one descriptor to a role's schema:
//!
//! ```
//! use rdesk_domain::config::schema::{FieldDescriptor, Schema, SectionDescriptor};
//!
//! #[derive(Default)]
//! struct Settings {
//!     fps: u32,
//! }
//!
//! let schema: Schema<Settings> = Schema::new().section(
//!     SectionDescriptor::<Settings>::new("Monitor").field(
//!         FieldDescriptor::int(
//!             "MaxFPS",
//!             1,
//!             100,
//!             |s: &Settings| s.fps.into(),
//!             |s, v| s.fps = v as u32,
//!         )
//!         .required(),
//!     ),
//! );
//! assert!(schema.find("Monitor").is_some());
//! ```

use super::error::Result;
use super::value;

/// Key of the field matching every otherwise unclaimed key in a section
pub const WILDCARD_KEY: &str = "*";

/// Loader for a wildcard field: receives the actual key and the raw value
pub type WildcardLoader<S> = fn(&mut S, &str, &str) -> Result<()>;

/// Accessor pair locating one typed value inside the settings record
pub struct Slot<S, T> {
    get: fn(&S) -> T,
    set: fn(&mut S, T),
}

impl<S, T> Slot<S, T> {
    pub fn new(get: fn(&S) -> T, set: fn(&mut S, T)) -> Self {
        Self { get, set }
    }

    pub fn get(&self, settings: &S) -> T {
        (self.get)(settings)
    }

    pub fn set(&self, settings: &mut S, value: T) {
        (self.set)(settings, value)
    }
}

/// Closed set of field kinds, each with its own validation and formatting
pub enum FieldKind<S> {
    /// Integer in `[min, max]`
    Int { min: i64, max: i64, slot: Slot<S, i64> },
    /// Floating point number in `[min, max]`
    Float { min: f64, max: f64, slot: Slot<S, f64> },
    /// One of the canonical boolean tokens
    Bool(Slot<S, bool>),
    /// String holding at most `capacity - 1` characters
    Text { capacity: usize, slot: Slot<S, String> },
    /// Index into an ordered list of captions
    Caption {
        captions: &'static [&'static str],
        slot: Slot<S, usize>,
    },
    /// Handler for every key not claimed by another field
    Wildcard(WildcardLoader<S>),
}

/// Metadata binding one key to its load/save behavior and requiredness
pub struct FieldDescriptor<S> {
    key: &'static str,
    kind: FieldKind<S>,
    saved: bool,
    required: bool,
}

impl<S> FieldDescriptor<S> {
    fn with_kind(key: &'static str, kind: FieldKind<S>) -> Self {
        Self {
            key,
            kind,
            saved: false,
            required: false,
        }
    }

    pub fn int(
        key: &'static str,
        min: i64,
        max: i64,
        get: fn(&S) -> i64,
        set: fn(&mut S, i64),
    ) -> Self {
        Self::with_kind(
            key,
            FieldKind::Int {
                min,
                max,
                slot: Slot::new(get, set),
            },
        )
    }

    pub fn float(
        key: &'static str,
        min: f64,
        max: f64,
        get: fn(&S) -> f64,
        set: fn(&mut S, f64),
    ) -> Self {
        Self::with_kind(
            key,
            FieldKind::Float {
                min,
                max,
                slot: Slot::new(get, set),
            },
        )
    }

    pub fn bool(key: &'static str, get: fn(&S) -> bool, set: fn(&mut S, bool)) -> Self {
        Self::with_kind(key, FieldKind::Bool(Slot::new(get, set)))
    }

    pub fn text(
        key: &'static str,
        capacity: usize,
        get: fn(&S) -> String,
        set: fn(&mut S, String),
    ) -> Self {
        Self::with_kind(
            key,
            FieldKind::Text {
                capacity,
                slot: Slot::new(get, set),
            },
        )
    }

    pub fn caption(
        key: &'static str,
        captions: &'static [&'static str],
        get: fn(&S) -> usize,
        set: fn(&mut S, usize),
    ) -> Self {
        Self::with_kind(
            key,
            FieldKind::Caption {
                captions,
                slot: Slot::new(get, set),
            },
        )
    }

    pub fn wildcard(load: WildcardLoader<S>) -> Self {
        Self::with_kind(WILDCARD_KEY, FieldKind::Wildcard(load))
    }

    /// Mark the field as required: a load pass must supply it
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as written back by the save engine
    pub fn saved(mut self) -> Self {
        self.saved = true;
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> &FieldKind<S> {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, FieldKind::Wildcard(_))
    }

    /// Whether the save engine writes this field. Wildcards are never saved.
    pub fn is_saved(&self) -> bool {
        self.saved && !self.is_wildcard()
    }

    /// Validate `value` and store it into `settings`.
    ///
    /// `key` is the key as written in the file; it differs from
    /// [`Self::key`] only for wildcard fields.
    pub fn load(&self, settings: &mut S, key: &str, value: &str) -> Result<()> {
        match &self.kind {
            FieldKind::Int { min, max, slot } => {
                slot.set(settings, value::parse_int(key, value, *min, *max)?);
            }
            FieldKind::Float { min, max, slot } => {
                slot.set(settings, value::parse_float(key, value, *min, *max)?);
            }
            FieldKind::Bool(slot) => slot.set(settings, value::parse_bool(key, value)?),
            FieldKind::Text { capacity, slot } => {
                slot.set(settings, value::parse_fixed_string(value, *capacity));
            }
            FieldKind::Caption { captions, slot } => {
                slot.set(settings, value::parse_caption(key, value, captions)?);
            }
            FieldKind::Wildcard(load) => load(settings, key, value)?,
        }
        Ok(())
    }

    /// Produce the textual value for the save engine.
    ///
    /// Returns `None` for fields that are not saved.
    pub fn save(&self, settings: &S) -> Option<String> {
        if !self.is_saved() {
            return None;
        }
        match &self.kind {
            FieldKind::Int { slot, .. } => Some(slot.get(settings).to_string()),
            FieldKind::Float { slot, .. } => Some(slot.get(settings).to_string()),
            FieldKind::Bool(slot) => Some(value::format_bool(slot.get(settings)).to_string()),
            FieldKind::Text { slot, .. } => Some(slot.get(settings)),
            FieldKind::Caption { captions, slot } => {
                captions.get(slot.get(settings)).map(|c| c.to_string())
            }
            FieldKind::Wildcard(_) => None,
        }
    }
}

/// Named group of field descriptors with at most one wildcard
pub struct SectionDescriptor<S> {
    name: &'static str,
    fields: Vec<FieldDescriptor<S>>,
}

impl<S> SectionDescriptor<S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    ///
    /// # Panics
    ///
    /// Panics when the key is already declared in this section, or when a
    /// second wildcard is added. Both are schema programming errors.
    pub fn field(mut self, field: FieldDescriptor<S>) -> Self {
        if field.is_wildcard() {
            assert!(
                !self.fields.iter().any(|f| f.is_wildcard()),
                "section [{}] already has a wildcard field",
                self.name
            );
        } else {
            assert!(
                !self.fields.iter().any(|f| !f.is_wildcard() && f.key == field.key),
                "duplicate key \"{}\" in section [{}]",
                field.key,
                self.name
            );
        }
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor<S>] {
        &self.fields
    }

    /// Field handling `key`: the exact match first, then the wildcard
    pub fn find(&self, key: &str) -> Option<&FieldDescriptor<S>> {
        self.fields
            .iter()
            .find(|f| !f.is_wildcard() && f.key == key)
            .or_else(|| self.fields.iter().find(|f| f.is_wildcard()))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor<S>> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Ordered list of section descriptors for one application role
pub struct Schema<S> {
    sections: Vec<SectionDescriptor<S>>,
}

impl<S> Default for Schema<S> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<S> Schema<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    ///
    /// # Panics
    ///
    /// Panics when a section with the same name is already registered.
    pub fn section(mut self, section: SectionDescriptor<S>) -> Self {
        assert!(
            self.find(section.name).is_none(),
            "duplicate section [{}]",
            section.name
        );
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[SectionDescriptor<S>] {
        &self.sections
    }

    pub fn find(&self, name: &str) -> Option<&SectionDescriptor<S>> {
        self.sections.iter().find(|s| s.name == name)
    }
}
