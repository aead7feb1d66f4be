//! The synchronization engine and its state machine.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use machconf_model::{MachineConfig, ServerConfiguration, ValidationError};

use crate::effects::{self, EditSnapshot};
use crate::mapping;

/// Where the engine currently is in the sync cycle.
///
/// At most one sync direction is active at a time; triggers that arrive while
/// one is active are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    /// An external change is being copied into the working configuration.
    SyncingFromExternal,
    /// A valid working configuration has been written outward and the host's
    /// reactions have not settled yet.
    SyncingToExternal,
}

/// Which kind of mutation a reactive pass responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Inbound,
    Edit,
}

/// Keeps the host container's flat machine configuration and the typed
/// working configuration eventually consistent.
///
/// The host owns the external value and shares it through an
/// `Rc<RefCell<..>>` handle; the engine exclusively owns the working
/// configuration and exposes it through [`config`](SyncEngine::config) and
/// [`edit`](SyncEngine::edit). Everything runs on one logical thread; there
/// is no locking and no cancellation, a pass always runs to completion.
pub struct SyncEngine {
    external: Rc<RefCell<MachineConfig>>,
    config: ServerConfiguration,
    state: SyncState,
    is_valid: bool,
    errors: Vec<ValidationError>,
    on_validity: Box<dyn FnMut(bool)>,
}

impl SyncEngine {
    /// Build the engine and run the initial inbound pass, so validity and
    /// errors reflect the host's value before the first edit.
    ///
    /// `on_validity` is invoked with the computed validity after every
    /// reactive pass, including this initial one.
    pub fn new(
        external: Rc<RefCell<MachineConfig>>,
        on_validity: impl FnMut(bool) + 'static,
    ) -> Self {
        let mut engine = Self {
            external,
            config: ServerConfiguration::default(),
            state: SyncState::Idle,
            is_valid: false,
            errors: Vec::new(),
            on_validity: Box::new(on_validity),
        };
        engine.ingest();
        engine.react(Origin::Inbound);
        engine
    }

    /// The working configuration, for display and field binding.
    pub fn config(&self) -> &ServerConfiguration {
        &self.config
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Current findings, in rule order.
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// True while an inbound pass is copying the external value in. The
    /// editing surface can use this to suppress its own reactions.
    pub fn syncing_from_external(&self) -> bool {
        self.state == SyncState::SyncingFromExternal
    }

    /// True from an outbound write until [`settle`](SyncEngine::settle).
    pub fn syncing_to_external(&self) -> bool {
        self.state == SyncState::SyncingToExternal
    }

    /// First error message recorded for a field.
    pub fn error_for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Host notification that the external value changed.
    ///
    /// Ignored while an outbound write is unsettled: such a change is an
    /// echo of the engine's own write and must not overwrite edits. An
    /// invalid external value still lands internally; inbound sync is never
    /// blocked by validation.
    pub fn external_changed(&mut self) {
        if self.state == SyncState::SyncingToExternal {
            debug!("external change ignored, outbound write not settled");
            return;
        }
        self.ingest();
        self.react(Origin::Inbound);
    }

    /// Apply a batch of edits from the editing surface.
    ///
    /// After the closure returns, the engine applies the cross-field
    /// corrections, re-validates, notifies the host of the new validity and,
    /// iff valid, writes the working configuration outward.
    pub fn edit(&mut self, apply: impl FnOnce(&mut ServerConfiguration)) {
        self.settle();
        let before = EditSnapshot::capture(&self.config);
        apply(&mut self.config);
        effects::apply(&before, &mut self.config);
        self.react(Origin::Edit);
    }

    /// Acknowledge that the host's reactions to an outbound write have
    /// flushed.
    ///
    /// Until the host settles, every external-change notification is treated
    /// as an echo. [`edit`](SyncEngine::edit) settles implicitly, so a host
    /// that never acknowledges cannot wedge editing.
    pub fn settle(&mut self) {
        if self.state == SyncState::SyncingToExternal {
            debug!("outbound write settled");
            self.state = SyncState::Idle;
        }
    }

    /// Copy the external value into the working configuration.
    fn ingest(&mut self) {
        self.state = SyncState::SyncingFromExternal;
        debug!("inbound sync started");
        {
            let external = self.external.borrow();
            mapping::apply_inbound(&external, &mut self.config);
        }
        self.state = SyncState::Idle;
    }

    /// Validate, notify, and propagate outward when allowed.
    ///
    /// Inbound-origin passes validate and notify but never write outward;
    /// only edits propagate. Outward writes leave the engine in
    /// [`SyncState::SyncingToExternal`] until settled.
    fn react(&mut self, origin: Origin) {
        self.errors = machconf_validate::validate(&self.config);
        self.is_valid = self.errors.is_empty();
        debug!(
            valid = self.is_valid,
            errors = self.errors.len(),
            "validation pass complete"
        );
        (self.on_validity)(self.is_valid);

        if self.is_valid && origin == Origin::Edit {
            self.state = SyncState::SyncingToExternal;
            debug!("outbound write started");
            mapping::render_outbound(&self.config, &mut self.external.borrow_mut());
        }
    }
}
