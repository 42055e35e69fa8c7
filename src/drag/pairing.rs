//! Transport/shipment pairing over drag-and-drop.
//!
//! ARCHITECTURE
//! ============
//! One `DragPairing` owns the drag context and the planning request. DOM or
//! Dioxus handlers translate browser events into `DragMsg` values and feed
//! them through `handle`; the returned `DragEffect` tells the caller what to
//! do to the page (restyle a row, click the planning form).
//!
//! TRADE-OFFS
//! ==========
//! The planning request is not cleared after a pairing is submitted. A later
//! drop overwrites both slots, so stale ids only survive if the host reads
//! the request without a fresh pairing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Transport,
    Shipment,
}

impl RowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Transport => "transport",
            RowKind::Shipment => "shipment",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown row type: {0:?}")]
pub struct UnknownRowKind(pub String);

impl FromStr for RowKind {
    type Err = UnknownRowKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transport" => Ok(RowKind::Transport),
            "shipment" => Ok(RowKind::Shipment),
            other => Err(UnknownRowKind(other.to_string())),
        }
    }
}

/// A table row as far as pairing cares: its element id and its `data-item-type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowRef {
    pub id: String,
    pub kind: Option<RowKind>,
}

impl RowRef {
    pub fn new(id: impl Into<String>, kind: Option<RowKind>) -> Self {
        Self { id: id.into(), kind }
    }

    pub fn parse(id: impl Into<String>, item_type: Option<&str>) -> Self {
        let kind = item_type.and_then(|t| t.parse().ok());
        Self { id: id.into(), kind }
    }
}

/// Payload posted as the `planning_request` field of the planning form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningRequest {
    pub transport_id: Option<String>,
    pub shipment_id: Option<String>,
}

impl PlanningRequest {
    pub fn is_complete(&self) -> bool {
        self.transport_id.is_some() && self.shipment_id.is_some()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(RowRef),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStyle {
    Highlighted,
    Dimmed,
}

impl RowStyle {
    pub fn remove_class(self) -> &'static str {
        match self {
            RowStyle::Highlighted => "bg-gray-700",
            RowStyle::Dimmed => "bg-gray-600",
        }
    }

    pub fn add_classes(self) -> [&'static str; 3] {
        match self {
            RowStyle::Highlighted => ["bg-gray-600", "transition", "duration-500"],
            RowStyle::Dimmed => ["bg-gray-700", "transition", "duration-500"],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragMsg {
    PointerEnter(RowRef),
    PointerLeave(RowRef),
    Start(RowRef),
    End(RowRef),
    Enter(RowRef),
    Leave(RowRef),
    Drop(RowRef),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    Paired(PlanningRequest),
    SameKind,
    UnknownKind,
    NoDrag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEffect {
    None,
    Style(String, RowStyle),
    Drop {
        target: String,
        outcome: PairOutcome,
    },
}

impl DragEffect {
    pub fn should_submit(&self) -> bool {
        matches!(
            self,
            DragEffect::Drop {
                outcome: PairOutcome::Paired(_),
                ..
            }
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragPairing {
    state: DragState,
    request: PlanningRequest,
}

impl DragPairing {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragged(&self) -> Option<&RowRef> {
        match &self.state {
            DragState::Dragging(row) => Some(row),
            DragState::Idle => None,
        }
    }

    pub fn request(&self) -> &PlanningRequest {
        &self.request
    }

    pub fn handle(&mut self, msg: DragMsg) -> DragEffect {
        match msg {
            DragMsg::PointerEnter(row) | DragMsg::Enter(row) => {
                DragEffect::Style(row.id, RowStyle::Highlighted)
            }
            DragMsg::PointerLeave(row) => DragEffect::Style(row.id, RowStyle::Dimmed),
            DragMsg::Leave(row) => {
                if self.dragged().is_some_and(|d| d.id == row.id) {
                    DragEffect::None
                } else {
                    DragEffect::Style(row.id, RowStyle::Dimmed)
                }
            }
            DragMsg::Start(row) => {
                debug!(row = %row.id, kind = ?row.kind, "drag started");
                let id = row.id.clone();
                self.state = DragState::Dragging(row);
                DragEffect::Style(id, RowStyle::Highlighted)
            }
            DragMsg::End(row) => {
                self.state = DragState::Idle;
                DragEffect::Style(row.id, RowStyle::Dimmed)
            }
            DragMsg::Drop(target) => {
                let outcome = self.connect(&target);
                DragEffect::Drop {
                    target: target.id,
                    outcome,
                }
            }
        }
    }

    /// Pairs the dragged row with `target`. Slots are filled by kind, not by
    /// which side was dragged.
    pub fn connect(&mut self, target: &RowRef) -> PairOutcome {
        let Some(source) = self.dragged() else {
            debug!(target = %target.id, "drop without an active drag ignored");
            return PairOutcome::NoDrag;
        };

        let (transport_id, shipment_id) = match (source.kind, target.kind) {
            (Some(RowKind::Transport), Some(RowKind::Shipment)) => (source.id.clone(), target.id.clone()),
            (Some(RowKind::Shipment), Some(RowKind::Transport)) => (target.id.clone(), source.id.clone()),
            (Some(_), Some(_)) => return PairOutcome::SameKind,
            _ => {
                warn!(source = %source.id, target = %target.id, "row without a known item type dropped");
                return PairOutcome::UnknownKind;
            }
        };

        debug!(transport = %transport_id, shipment = %shipment_id, "rows paired");
        self.request = PlanningRequest {
            transport_id: Some(transport_id),
            shipment_id: Some(shipment_id),
        };
        PairOutcome::Paired(self.request.clone())
    }
}

#[cfg(test)]
#[path = "pairing_test.rs"]
mod tests;
