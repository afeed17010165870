//! Discrete editing operations on a [`FormConfig`].
//!
//! Each operation applies one change and then renormalizes the whole
//! config, so layouts and identity never reference a missing field.

use draftkit_core::{Error, Result};

use crate::model::{
    FieldDefinition, FieldOption, FieldType, FormConfig, IdentityRole, LayoutSection, LayoutStyle,
    Mode, ModeList, MoveDirection,
};

/// Label given to newly added fields.
pub const NEW_FIELD_LABEL: &str = "새 입력 항목";

/// Title given to newly added sections.
pub const NEW_SECTION_TITLE: &str = "새 섹션";

impl FormConfig {
    fn renormalize(&mut self) {
        *self = self.normalized();
    }

    fn require_field(&self, id: &str) -> Result<()> {
        if self.contains_field(id) {
            Ok(())
        } else {
            Err(Error::not_found(format!("field {id:?}")))
        }
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut LayoutSection> {
        self.register_layout
            .iter_mut()
            .find(|section| section.id == id)
            .ok_or_else(|| Error::not_found(format!("section {id:?}")))
    }

    fn enable_mode(&mut self, field_id: &str, mode: Mode) {
        if let Some(field) = self.field_mut(field_id)
            && !field.enabled_modes.contains(&mode)
        {
            field.enabled_modes.push(mode);
        }
    }

    // ------------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------------

    /// Append a register-only text field with a fresh `custom-N` id.
    ///
    /// Returns the new id.
    pub fn add_field(&mut self) -> String {
        let id = unused_id(|n| format!("custom-{n}"), |id| self.contains_field(id));
        self.fields.push(FieldDefinition {
            id: id.clone(),
            label: NEW_FIELD_LABEL.to_string(),
            field_type: FieldType::Text,
            enabled_modes: vec![Mode::Register],
            ..FieldDefinition::default()
        });
        self.renormalize();
        id
    }

    /// Change a field's id everywhere it is referenced.
    ///
    /// # Errors
    ///
    /// - `InvalidData` if the new id is blank
    /// - `NotFound` if no field has the old id
    /// - `Conflict` if another field already uses the new id
    pub fn rename_field(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        let new_id = new_id.trim();
        if new_id.is_empty() {
            return Err(Error::invalid_data("field id must not be empty"));
        }
        self.require_field(old_id)?;
        if new_id == old_id {
            return Ok(());
        }
        if self.contains_field(new_id) {
            return Err(Error::conflict(format!("field id {new_id:?} is already in use")));
        }

        let rename = |id: &mut String| {
            if *id == old_id {
                *id = new_id.to_string();
            }
        };
        self.fields.iter_mut().for_each(|field| {
            rename(&mut field.id);
            rename(&mut field.match_field);
        });
        self.login_layout.iter_mut().for_each(rename);
        for section in &mut self.register_layout {
            section.field_ids.iter_mut().for_each(rename);
        }
        for role in IdentityRole::ALL {
            if self.identity.get(role) == old_id {
                self.identity.set(role, new_id);
            }
        }
        self.renormalize();
        Ok(())
    }

    /// Remove a field, its layout placements and any identity role bound
    /// to it.
    pub fn remove_field(&mut self, id: &str) -> Result<()> {
        self.require_field(id)?;
        self.fields.retain(|field| field.id != id);
        self.login_layout.retain(|placed| placed != id);
        for section in &mut self.register_layout {
            section.field_ids.retain(|placed| placed != id);
        }
        for role in IdentityRole::ALL {
            if self.identity.get(role) == id {
                self.identity.set(role, "");
            }
        }
        self.renormalize();
        Ok(())
    }

    /// Apply an arbitrary change to one field.
    pub fn update_field(&mut self, id: &str, change: impl FnOnce(&mut FieldDefinition)) -> Result<()> {
        let field = self
            .field_mut(id)
            .ok_or_else(|| Error::not_found(format!("field {id:?}")))?;
        let original_id = field.id.clone();
        change(field);
        field.id = original_id;
        self.renormalize();
        Ok(())
    }

    /// Flip `mode` in the field's enabled or required list.
    ///
    /// Required modes that are not enabled are dropped on renormalization.
    pub fn toggle_mode(&mut self, id: &str, mode: Mode, list: ModeList) -> Result<()> {
        self.update_field(id, |field| {
            let modes = match list {
                ModeList::Enabled => &mut field.enabled_modes,
                ModeList::Required => &mut field.required_modes,
            };
            if let Some(pos) = modes.iter().position(|m| *m == mode) {
                modes.remove(pos);
            } else {
                modes.push(mode);
            }
        })
    }

    /// Replace a select field's options from `value|label` lines.
    pub fn set_field_options_text(&mut self, id: &str, text: &str) -> Result<()> {
        let options = parse_options_text(text);
        self.update_field(id, |field| field.options = Some(options))
    }

    // ------------------------------------------------------------------------
    // Login layout
    // ------------------------------------------------------------------------

    /// Append a field to the login layout, enabling it for login.
    pub fn add_login_field(&mut self, id: &str) -> Result<()> {
        self.require_field(id)?;
        self.enable_mode(id, Mode::Login);
        if !self.login_layout.iter().any(|placed| placed == id) {
            self.login_layout.push(id.to_string());
        }
        self.renormalize();
        Ok(())
    }

    pub fn remove_login_field(&mut self, id: &str) {
        self.login_layout.retain(|placed| placed != id);
        self.renormalize();
    }

    /// Move the login entry at `index` one step. Out-of-range moves are ignored.
    pub fn move_login_field(&mut self, index: usize, direction: MoveDirection) {
        move_item(&mut self.login_layout, index, direction);
        self.renormalize();
    }

    // ------------------------------------------------------------------------
    // Register sections
    // ------------------------------------------------------------------------

    /// Append an empty section with a fresh `section-N` id. Returns the id.
    pub fn add_section(&mut self) -> String {
        let id = unused_id(
            |n| format!("section-{n}"),
            |id| self.register_layout.iter().any(|section| section.id == id),
        );
        self.register_layout.push(new_section(&id));
        self.renormalize();
        id
    }

    /// Remove a section. The last section is replaced by an empty one.
    pub fn remove_section(&mut self, id: &str) -> Result<()> {
        self.section_mut(id)?;
        self.register_layout.retain(|section| section.id != id);
        if self.register_layout.is_empty() {
            self.register_layout.push(new_section("section-1"));
        }
        self.renormalize();
        Ok(())
    }

    pub fn move_section(&mut self, index: usize, direction: MoveDirection) {
        move_item(&mut self.register_layout, index, direction);
        self.renormalize();
    }

    /// Add a field to a section, enabling it for register.
    pub fn add_field_to_section(&mut self, section_id: &str, field_id: &str) -> Result<()> {
        self.require_field(field_id)?;
        let section = self.section_mut(section_id)?;
        if !section.field_ids.iter().any(|placed| placed == field_id) {
            section.field_ids.push(field_id.to_string());
        }
        self.enable_mode(field_id, Mode::Register);
        self.renormalize();
        Ok(())
    }

    pub fn remove_field_from_section(&mut self, section_id: &str, field_id: &str) -> Result<()> {
        self.section_mut(section_id)?
            .field_ids
            .retain(|placed| placed != field_id);
        self.renormalize();
        Ok(())
    }

    pub fn move_field_within_section(
        &mut self,
        section_id: &str,
        index: usize,
        direction: MoveDirection,
    ) -> Result<()> {
        move_item(&mut self.section_mut(section_id)?.field_ids, index, direction);
        self.renormalize();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------------

    /// Bind an identity role to a field.
    ///
    /// An empty id unbinds the role, though renormalization rebinds it to
    /// the role's default field when that field exists.
    pub fn set_identity(&mut self, role: IdentityRole, field_id: &str) -> Result<()> {
        let field_id = field_id.trim();
        if !field_id.is_empty() {
            self.require_field(field_id)?;
        }
        self.identity.set(role, field_id);
        self.renormalize();
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn new_section(id: &str) -> LayoutSection {
    LayoutSection {
        id: id.to_string(),
        title: NEW_SECTION_TITLE.to_string(),
        description: String::new(),
        style: LayoutStyle::Default,
        field_ids: Vec::new(),
    }
}

fn unused_id(format: impl Fn(usize) -> String, taken: impl Fn(&str) -> bool) -> String {
    (1..)
        .map(format)
        .find(|candidate| !taken(candidate))
        .unwrap_or_default()
}

fn move_item<T>(items: &mut [T], index: usize, direction: MoveDirection) {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1),
    };
    if let Some(target) = target
        && index < items.len()
        && target < items.len()
    {
        items.swap(index, target);
    }
}

/// Parse select options from text, one per line.
///
/// `value|label` lines split on the first `|`; a line without one uses the
/// whole line as both value and label. Blank lines are skipped.
pub fn parse_options_text(text: &str) -> Vec<FieldOption> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('|') {
            Some((value, label)) => FieldOption::new(value.trim(), label.trim()),
            None => FieldOption::new(line, line),
        })
        .collect()
}

/// Render options as `value|label` lines.
pub fn format_options_text(options: &[FieldOption]) -> String {
    options
        .iter()
        .map(|option| format!("{}|{}", option.value, option.label))
        .collect::<Vec<_>>()
        .join("\n")
}
