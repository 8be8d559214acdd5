//! Spell Slots - Hotkeys that open the pad
//!
//! Each slot binds a key to a set of combos it may cast. Pressing a slot's
//! key opens the pad with that slot's whitelist; pressing it again (or the
//! cancel key) puts the pad away.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::error::SlotError;
use crate::gesture::{CastingSession, PadHost, Whitelist};

// ═══════════════════════════════════════════════════════════════════════════════
// KEYS
// ═══════════════════════════════════════════════════════════════════════════════

/// A key the board reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
}

// ═══════════════════════════════════════════════════════════════════════════════
// SLOT
// ═══════════════════════════════════════════════════════════════════════════════

/// A hotkey slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Display name
    pub name: String,
    /// Key that toggles this slot
    pub key: Key,
    /// Unassigned slots ignore their key
    pub assigned: bool,
    /// Combos this slot may cast (empty = any)
    pub allowed_combo_ids: Vec<String>,
}

impl Slot {
    /// An assigned slot allowing the given combos
    pub fn new<I, S>(name: impl Into<String>, key: Key, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            key,
            assigned: true,
            allowed_combo_ids: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// A slot with nothing assigned yet
    pub fn unassigned(name: impl Into<String>, key: Key) -> Self {
        Self {
            name: name.into(),
            key,
            assigned: false,
            allowed_combo_ids: Vec::new(),
        }
    }

    /// Whitelist handed to the session when this slot opens
    pub fn whitelist(&self) -> Whitelist {
        Whitelist::only(self.allowed_combo_ids.iter().cloned())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SLOT BOARD
// ═══════════════════════════════════════════════════════════════════════════════

/// What a key press asks the pad to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotCommand {
    /// Open the pad for this slot index
    Open(usize),
    /// Put the pad away
    Close,
    /// Nothing to do
    Ignored,
}

/// Slot bindings plus which slot (if any) currently has the pad open
pub struct SlotBoard {
    slots: Vec<Slot>,
    active: Option<usize>,
    cancel_key: Key,
}

impl SlotBoard {
    /// Empty board, Escape cancels
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            active: None,
            cancel_key: Key::Escape,
        }
    }

    /// Board with the stock slots 1-3
    pub fn with_defaults() -> Self {
        let mut board = Self::new();
        board.slots.push(Slot::new("1", Key::Char('1'), ["Spell_H"]));
        board.slots.push(Slot::new("2", Key::Char('2'), ["Spell_V"]));
        board.slots.push(Slot::new("3", Key::Char('3'), ["Spell_Slash"]));
        board
    }

    /// Add a slot, returning its index
    pub fn add_slot(&mut self, slot: Slot) -> Result<usize, SlotError> {
        if slot.key == self.cancel_key || self.slots.iter().any(|s| s.key == slot.key) {
            return Err(SlotError::KeyInUse);
        }
        self.slots.push(slot);
        Ok(self.slots.len() - 1)
    }

    /// Assign or unassign a slot
    pub fn set_assigned(&mut self, index: usize, assigned: bool) -> Result<(), SlotError> {
        let slot = self.slots.get_mut(index).ok_or(SlotError::NoSuchSlot)?;
        slot.assigned = assigned;
        if !assigned && self.active == Some(index) {
            self.active = None;
        }
        Ok(())
    }

    /// Translate a key press into a pad command
    pub fn press(&mut self, key: Key) -> SlotCommand {
        if key == self.cancel_key {
            return match self.active.take() {
                Some(_) => SlotCommand::Close,
                None => SlotCommand::Ignored,
            };
        }

        let Some(index) = self.slots.iter().position(|s| s.key == key) else {
            return SlotCommand::Ignored;
        };
        if !self.slots[index].assigned {
            debug!("slot {} is unassigned", self.slots[index].name);
            return SlotCommand::Ignored;
        }

        if self.active == Some(index) {
            self.active = None;
            SlotCommand::Close
        } else {
            self.active = Some(index);
            SlotCommand::Open(index)
        }
    }

    /// Carry out a command on a session
    pub fn apply<H: PadHost>(&self, command: SlotCommand, session: &mut CastingSession<H>) {
        match command {
            SlotCommand::Open(index) => {
                if let Some(slot) = self.slots.get(index) {
                    session.activate(Some(slot.whitelist()));
                }
            }
            SlotCommand::Close => session.deactivate(),
            SlotCommand::Ignored => {}
        }
    }

    /// Forget the open slot when the pad closed itself (e.g. after a cast)
    pub fn sync(&mut self, session_active: bool) {
        if !session_active {
            self.active = None;
        }
    }

    /// Index of the slot holding the pad open
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_slot(&self) -> Option<&Slot> {
        self.active.and_then(|i| self.slots.get(i))
    }

    pub fn slot(&self, index: usize) -> Result<&Slot, SlotError> {
        self.slots.get(index).ok_or(SlotError::NoSuchSlot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
