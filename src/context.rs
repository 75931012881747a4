//! Look-dev window state: two views, their layout, and camera sync.

use crate::camera::{CameraController, CameraState, Viewport};
use crate::input::{InputEvent, Modifiers};
use crate::util::FlyTimer;

/// One of the two look-dev views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewIndex {
    /// Left/top view.
    First,
    /// Right/bottom view.
    Second,
}

impl ViewIndex {
    /// The other view.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// A single view, or the composite of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewCompositionIndex {
    /// First view.
    #[default]
    First,
    /// Second view.
    Second,
    /// Both views blended in one frame.
    Composite,
}

impl From<ViewIndex> for ViewCompositionIndex {
    fn from(index: ViewIndex) -> Self {
        match index {
            ViewIndex::First => Self::First,
            ViewIndex::Second => Self::Second,
        }
    }
}

/// How the two views share the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Only the first view.
    #[default]
    FullFirstView,
    /// Only the second view.
    FullSecondView,
    /// Side by side.
    HorizontalSplit,
    /// Stacked.
    VerticalSplit,
    /// One frame split by a movable line.
    CustomSplit,
    /// One frame split by a movable circle.
    CustomCircular,
}

impl Layout {
    /// A single view fills the window.
    #[must_use]
    pub const fn is_simple_view(self) -> bool {
        matches!(self, Self::FullFirstView | Self::FullSecondView)
    }

    /// Both views are shown in separate panes.
    #[must_use]
    pub const fn is_multi_view(self) -> bool {
        matches!(self, Self::HorizontalSplit | Self::VerticalSplit)
    }

    /// Both views are combined into one frame.
    #[must_use]
    pub const fn is_combined_view(self) -> bool {
        matches!(self, Self::CustomSplit | Self::CustomCircular)
    }
}

/// Layout selection and panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutContext {
    /// Active layout.
    pub view_layout: Layout,
    /// View that last received input.
    pub last_focused_view: ViewCompositionIndex,
    /// Whether the environment side panel is open.
    pub show_environment_panel: bool,
}

/// Per-view state.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Camera framing of this view.
    pub camera: CameraState,
    /// Timer for this view's fly ticks.
    pub fly_timer: FlyTimer,
}

impl ViewContext {
    /// Route an input event through `controller` to this view's camera.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_input(
        &mut self,
        controller: &mut CameraController,
        event: &InputEvent,
        viewport: Viewport,
    ) -> bool {
        let (camera, consumed) =
            controller.handle_event(self.camera, event, viewport);
        self.camera = camera;
        consumed
    }

    /// Run one fly tick on this view's camera.
    pub fn layout_tick(
        &mut self,
        controller: &mut CameraController,
        modifiers: Modifiers,
    ) {
        self.camera =
            controller.layout(self.camera, &mut self.fly_timer, modifiers);
    }
}

/// Look-dev window state.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Layout and focus.
    pub layout: LayoutContext,
    views: [ViewContext; 2],
}

impl Context {
    /// Borrow a view.
    #[must_use]
    pub fn view(&self, index: ViewIndex) -> &ViewContext {
        &self.views[index.slot()]
    }

    /// Mutably borrow a view.
    pub fn view_mut(&mut self, index: ViewIndex) -> &mut ViewContext {
        &mut self.views[index.slot()]
    }

    /// Record which view received input last.
    pub fn focus(&mut self, index: ViewCompositionIndex) {
        self.layout.last_focused_view = index;
    }

    /// Copy the camera of `base` onto the other view.
    pub fn synchronize_camera_states(&mut self, base: ViewIndex) {
        let source = self.views[base.slot()].camera;
        log::debug!("synchronizing {:?} camera from {base:?}", base.other());
        self.views[base.other().slot()]
            .camera
            .synchronize_from(&source);
    }
}
