//! Modifier chains: ordered decorations attached to a UI node.
//!
//! Two kinds of elements exist: background draws and semantics recorders.
//! Everything else the toolkit would offer (padding, input, layout) is out of
//! scope for semantics testing.

use crate::graphics::{Brush, Color, Shape};
use crate::semantics::{
    AccessibilityAction, ProgressBarRangeInfo, Role, SemanticsActions, SemanticsConfiguration,
    SemanticsProperties, ToggleableState,
};
use std::fmt;
use std::rc::Rc;

/// Paint for a background element
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Solid color
    Color(Color),
    /// Brush (gradient or solid)
    Brush(Brush),
}

/// Native background draw
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundElement {
    /// Paint
    pub fill: Fill,
    /// Clip outline
    pub shape: Shape,
    /// Opacity applied to the paint
    pub alpha: f32,
}

/// Records semantics properties for the node it is attached to
#[derive(Clone)]
pub struct SemanticsElement {
    merge_descendants: bool,
    recorder: Rc<dyn Fn(&mut SemanticsConfiguration)>,
}

impl SemanticsElement {
    /// Create a recorder element
    pub fn new<F>(merge_descendants: bool, recorder: F) -> Self
    where
        F: Fn(&mut SemanticsConfiguration) + 'static,
    {
        Self {
            merge_descendants,
            recorder: Rc::new(recorder),
        }
    }

    /// Run the recorder into a fresh configuration
    #[must_use]
    pub fn record(&self) -> SemanticsConfiguration {
        let mut config = SemanticsConfiguration::new();
        config.set_merges_descendants(self.merge_descendants);
        (self.recorder)(&mut config);
        config
    }
}

impl fmt::Debug for SemanticsElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticsElement")
            .field("merge_descendants", &self.merge_descendants)
            .finish()
    }
}

/// One link of a modifier chain
#[derive(Debug, Clone)]
pub enum ModifierElement {
    /// Background draw
    Background(BackgroundElement),
    /// Semantics recorder
    Semantics(SemanticsElement),
}

/// Ordered chain of modifier elements, outermost first
#[derive(Debug, Clone, Default)]
pub struct Modifier {
    elements: Vec<ModifierElement>,
}

impl Modifier {
    /// Empty chain
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append another chain
    #[must_use]
    pub fn then(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }

    /// Append a single element
    #[must_use]
    pub fn then_element(mut self, element: ModifierElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Elements in chain order
    #[must_use]
    pub fn elements(&self) -> &[ModifierElement] {
        &self.elements
    }

    /// Whether the chain has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Solid background clipped to `shape`
    #[must_use]
    pub fn background(self, color: Color, shape: Shape) -> Self {
        self.then_element(ModifierElement::Background(BackgroundElement {
            fill: Fill::Color(color),
            shape,
            alpha: 1.0,
        }))
    }

    /// Brush background clipped to `shape` with opacity `alpha`
    #[must_use]
    pub fn background_brush(self, brush: Brush, shape: Shape, alpha: f32) -> Self {
        self.then_element(ModifierElement::Background(BackgroundElement {
            fill: Fill::Brush(brush),
            shape,
            alpha,
        }))
    }

    /// Record semantics properties for this node
    #[must_use]
    pub fn semantics<F>(self, recorder: F) -> Self
    where
        F: Fn(&mut SemanticsConfiguration) + 'static,
    {
        self.then_element(ModifierElement::Semantics(SemanticsElement::new(
            false, recorder,
        )))
    }

    /// Record semantics and absorb descendants in the merged tree
    #[must_use]
    pub fn merged_semantics<F>(self, recorder: F) -> Self
    where
        F: Fn(&mut SemanticsConfiguration) + 'static,
    {
        self.then_element(ModifierElement::Semantics(SemanticsElement::new(
            true, recorder,
        )))
    }

    /// Tag the node for lookup in tests
    #[must_use]
    pub fn test_tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.semantics(move |config| config.set(SemanticsProperties::TEST_TAG, tag.clone()))
    }

    /// Describe the node's visual content
    #[must_use]
    pub fn content_description(self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.semantics(move |config| {
            config.set(
                SemanticsProperties::CONTENT_DESCRIPTION,
                vec![description.clone()],
            );
        })
    }

    /// Human readable state
    #[must_use]
    pub fn state_description(self, state: impl Into<String>) -> Self {
        let state = state.into();
        self.semantics(move |config| {
            config.set(SemanticsProperties::STATE_DESCRIPTION, state.clone());
        })
    }

    /// Progress range of an indicator
    #[must_use]
    pub fn progress(self, info: ProgressBarRangeInfo) -> Self {
        self.semantics(move |config| {
            config.set(SemanticsProperties::PROGRESS_BAR_RANGE_INFO, info.clone());
        })
    }

    /// Focus state
    #[must_use]
    pub fn focused(self, focused: bool) -> Self {
        self.semantics(move |config| config.set(SemanticsProperties::FOCUSED, focused))
    }

    /// Hide from the user; the node is never reported as displayed
    #[must_use]
    pub fn invisible_to_user(self) -> Self {
        self.semantics(|config| config.set(SemanticsProperties::INVISIBLE_TO_USER, ()))
    }

    /// Enabled click target with a button role
    #[must_use]
    pub fn clickable(self, on_click: impl Fn() + 'static) -> Self {
        self.clickable_with(true, on_click)
    }

    /// Click target, optionally disabled
    #[must_use]
    pub fn clickable_with(self, enabled: bool, on_click: impl Fn() + 'static) -> Self {
        let action = click_action(on_click);
        self.merged_semantics(move |config| {
            config.set(SemanticsProperties::ROLE, Role::Button);
            config.set(SemanticsActions::ON_CLICK, action.clone());
            if !enabled {
                config.set(SemanticsProperties::DISABLED, ());
            }
        })
    }

    /// Two-state toggle such as a checkbox or switch
    #[must_use]
    pub fn toggleable(
        self,
        state: impl Into<ToggleableState>,
        role: Role,
        on_toggle: impl Fn() + 'static,
    ) -> Self {
        let state = state.into();
        let action = click_action(on_toggle);
        self.merged_semantics(move |config| {
            config.set(SemanticsProperties::TOGGLEABLE_STATE, state);
            config.set(SemanticsProperties::ROLE, role);
            config.set(SemanticsActions::ON_CLICK, action.clone());
        })
    }

    /// Selectable item such as a tab or radio button
    #[must_use]
    pub fn selectable(self, selected: bool, on_click: impl Fn() + 'static) -> Self {
        let action = click_action(on_click);
        self.merged_semantics(move |config| {
            config.set(SemanticsProperties::SELECTED, selected);
            config.set(SemanticsActions::ON_CLICK, action.clone());
        })
    }

    /// Long-press target
    #[must_use]
    pub fn long_clickable(self, on_long_click: impl Fn() + 'static) -> Self {
        let action = click_action(on_long_click);
        self.merged_semantics(move |config| {
            config.set(SemanticsActions::ON_LONG_CLICK, action.clone());
        })
    }

    /// Semantics of this node, `None` when no element records any
    #[must_use]
    pub fn semantics_configuration(&self) -> Option<SemanticsConfiguration> {
        let mut recorders = self.elements.iter().filter_map(|element| match element {
            ModifierElement::Semantics(semantics) => Some(semantics),
            ModifierElement::Background(_) => None,
        });
        let mut config = recorders.next()?.record();
        for recorder in recorders {
            config.collapse_peer(&recorder.record());
        }
        Some(config)
    }

    /// Background elements in draw order
    pub fn backgrounds(&self) -> impl Iterator<Item = &BackgroundElement> {
        self.elements.iter().filter_map(|element| match element {
            ModifierElement::Background(background) => Some(background),
            ModifierElement::Semantics(_) => None,
        })
    }
}

fn click_action(on_click: impl Fn() + 'static) -> AccessibilityAction {
    AccessibilityAction::new(None, move || {
        on_click();
        true
    })
}
