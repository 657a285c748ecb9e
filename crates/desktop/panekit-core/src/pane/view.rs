// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{
    config::{PaneBehavior, PaneMode, PaneProps},
    position::PanePosition,
    state::PaneState,
};
use crate::{class_list::ClassList, icon::Chevron, size::SizeToken};

/// One of the two content layers. Both stay mounted; only the active one is
/// shown, so content keeps its own state across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSlot {
    pub classes: ClassList,
    pub active:  bool,
}

impl ContentSlot {
    fn new(kind: &str, active: bool) -> Self {
        let mut classes = ClassList::new("pane__content");
        classes.push(format!("pane__content--{kind}"));
        classes.push_if(active, "pane__content--active");
        Self { classes, active }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandleView {
    pub classes:      ClassList,
    pub aria_label:   &'static str,
    /// Base direction for the pane's position.
    pub chevron:      Chevron,
    /// Set while open; the chevron is drawn turned by 180 degrees.
    pub rotated:      bool,
    pub icon_classes: ClassList,
}

impl HandleView {
    /// The direction the chevron visually points after rotation.
    pub const fn pointing(&self) -> Chevron {
        if self.rotated { self.chevron.reversed() } else { self.chevron }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackdropView {
    pub classes: ClassList,
    pub visible: bool,
}

/// Everything a renderer needs to draw a pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneView {
    pub classes:       ClassList,
    pub role:          &'static str,
    pub aria_expanded: bool,
    pub state:         PaneState,
    pub position:      PanePosition,
    pub mode:          PaneMode,
    pub behavior:      PaneBehavior,
    pub fixed:         bool,
    pub open_size:     SizeToken,
    pub partial_size:  SizeToken,
    pub full:          ContentSlot,
    pub partial:       Option<ContentSlot>,
    pub handle:        Option<HandleView>,
    pub backdrop:      BackdropView,
}

impl PaneView {
    pub(crate) fn build(props: &PaneProps, state: PaneState) -> Self {
        let behavior = props.resolved_behavior();

        let mut classes = ClassList::new("pane");
        classes.push(format!("pane--{}", props.position));
        classes.push(format!("pane--{state}"));
        classes.push(format!("pane--{}", props.mode));
        classes.push_if(behavior == PaneBehavior::Overlay, "pane--overlay");
        classes.push_if(props.fixed, "pane--fixed");
        if let Some(modifier) = props.size.modifier() {
            classes.push(format!("pane--{modifier}"));
        }
        if let Some(class) = &props.class {
            classes.push(class.clone());
        }

        let handle = props.show_handle().then(|| {
            let rotated = state == PaneState::Open;
            let mut icon_classes = ClassList::new("pane__handle-icon");
            icon_classes.push_if(rotated, "pane__handle-icon--rotated");
            HandleView {
                classes: ClassList::new("pane__handle"),
                aria_label: state.handle_label(),
                chevron: props.position.outward_chevron(),
                rotated,
                icon_classes,
            }
        });

        let backdrop_visible = props.show_backdrop() && state != PaneState::Closed;
        let mut backdrop_classes = ClassList::new("pane__backdrop");
        backdrop_classes.push_if(backdrop_visible, "pane__backdrop--visible");
        backdrop_classes.push_if(props.fixed, "pane__backdrop--fixed");

        Self {
            classes,
            role: "region",
            aria_expanded: state.is_expanded(),
            state,
            position: props.position,
            mode: props.mode,
            behavior,
            fixed: props.fixed,
            open_size: props.resolved_open_size(),
            partial_size: props.resolved_partial_size(),
            full: ContentSlot::new("full", state == PaneState::Open),
            partial: props
                .partial_content
                .then(|| ContentSlot::new("partial", state == PaneState::Partial)),
            handle,
            backdrop: BackdropView {
                classes: backdrop_classes,
                visible: backdrop_visible,
            },
        }
    }

    /// Custom properties carried on the root element.
    pub fn style(&self) -> [(&'static str, &str); 2] {
        [
            ("--pane-open-size", self.open_size.as_str()),
            ("--pane-partial-size", self.partial_size.as_str()),
        ]
    }

    /// Size along the pane's axis for the current state, `None` when closed.
    pub const fn extent(&self) -> Option<&SizeToken> {
        match self.state {
            PaneState::Closed => None,
            PaneState::Partial => Some(&self.partial_size),
            PaneState::Open => Some(&self.open_size),
        }
    }

    /// Whether the pane takes layout space away from its siblings.
    pub fn occupies_layout(&self) -> bool {
        self.behavior == PaneBehavior::Push && self.extent().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::SizeVariant;

    #[test]
    fn root_classes_follow_configuration_order() {
        let props = PaneProps::new(PanePosition::Right)
            .mode(PaneMode::Temporary)
            .fixed(true)
            .size(SizeVariant::Compact)
            .class("drawer");
        let view = PaneView::build(&props, PaneState::Open);
        assert_eq!(
            view.classes.to_string(),
            "pane pane--right pane--open pane--temporary pane--overlay pane--fixed pane--compact drawer"
        );
        assert_eq!(view.role, "region");
        assert!(view.aria_expanded);
    }

    #[test]
    fn normal_size_adds_no_class() {
        let view = PaneView::build(&PaneProps::new(PanePosition::Left), PaneState::Closed);
        assert_eq!(view.classes.to_string(), "pane pane--left pane--closed pane--permanent");
        assert!(!view.aria_expanded);
    }

    #[test]
    fn only_the_matching_slot_is_active() {
        let props = PaneProps::new(PanePosition::Left).partial_content(true);

        let partial = PaneView::build(&props, PaneState::Partial);
        assert!(!partial.full.active);
        assert!(partial.partial.as_ref().is_some_and(|slot| slot.active));

        let open = PaneView::build(&props, PaneState::Open);
        assert!(open.full.active);
        assert!(open.full.classes.contains("pane__content--active"));
        assert!(open.partial.as_ref().is_some_and(|slot| !slot.active));

        let closed = PaneView::build(&props, PaneState::Closed);
        assert!(!closed.full.active);
        assert!(closed.partial.as_ref().is_some_and(|slot| !slot.active));
    }

    #[test]
    fn partial_slot_absent_without_partial_content() {
        let view = PaneView::build(&PaneProps::new(PanePosition::Left), PaneState::Open);
        assert!(view.partial.is_none());
    }

    #[test]
    fn handle_chevron_turns_inward_when_open() {
        let props = PaneProps::new(PanePosition::Left);
        let closed = PaneView::build(&props, PaneState::Closed).handle;
        let open = PaneView::build(&props, PaneState::Open).handle;

        let closed = closed.as_ref();
        assert_eq!(closed.map(HandleView::pointing), Some(Chevron::Right));
        assert_eq!(closed.map(|h| h.aria_label), Some("Open pane"));

        let open = open.as_ref();
        assert_eq!(open.map(|h| h.rotated), Some(true));
        assert_eq!(open.map(HandleView::pointing), Some(Chevron::Left));
        assert_eq!(open.map(|h| h.aria_label), Some("Close pane"));
    }

    #[test]
    fn backdrop_visible_only_for_open_overlay() {
        let overlay = PaneProps::new(PanePosition::Left).mode(PaneMode::Temporary).fixed(true);
        let view = PaneView::build(&overlay, PaneState::Partial);
        assert!(view.backdrop.visible);
        assert_eq!(
            view.backdrop.classes.to_string(),
            "pane__backdrop pane__backdrop--visible pane__backdrop--fixed"
        );

        assert!(!PaneView::build(&overlay, PaneState::Closed).backdrop.visible);
        let push = PaneProps::new(PanePosition::Left);
        assert!(!PaneView::build(&push, PaneState::Open).backdrop.visible);
    }

    #[test]
    fn style_exposes_size_properties() {
        let view = PaneView::build(&PaneProps::new(PanePosition::Top), PaneState::Partial);
        assert_eq!(
            view.style(),
            [("--pane-open-size", "240px"), ("--pane-partial-size", "56px")]
        );
        assert_eq!(view.extent().map(SizeToken::as_str), Some("56px"));
    }
}
