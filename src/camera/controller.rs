use glam::{Quat, Vec2, Vec3};

use crate::camera::fly::fly_step;
use crate::camera::mode::{select_mode, ControllerMode};
use crate::camera::state::{CameraState, Viewport};
use crate::input::{
    HeldKeys, InputEvent, KeyAction, Modifiers, MouseButton, Platform,
};
use crate::options::{CameraOptions, KeybindingOptions, Options};
use crate::util::FlyTimer;

/// Zoom-drag bookkeeping captured when Zoom mode starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ZoomDrag {
    start_zoom: f32,
    zoom_speed: f32,
    total_motion: f32,
    right_button: bool,
}

/// Viewport camera controller: orbit, pan, zoom and fly navigation.
///
/// The controller owns only transient interaction state (active mode, zoom
/// drag record, held fly keys, fly speed). The [`CameraState`] it drives is
/// owned by the caller and passed through every update.
#[derive(Debug, Clone)]
pub struct CameraController {
    mode: ControllerMode,
    zoom: ZoomDrag,
    held: HeldKeys,
    fly_speed: f32,
    platform: Platform,
    options: CameraOptions,
    keybindings: KeybindingOptions,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl CameraController {
    /// Create an idle controller for the current platform.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            mode: ControllerMode::None,
            zoom: ZoomDrag::default(),
            held: HeldKeys::default(),
            fly_speed: 0.0,
            platform: Platform::current(),
            options: options.camera.clone(),
            keybindings: options.keybindings.clone(),
        }
    }

    /// Use another platform's modifier conventions.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Replace tuning and key bindings. Interaction state is kept.
    pub fn set_options(&mut self, options: &Options) {
        self.options = options.camera.clone();
        self.keybindings = options.keybindings.clone();
    }

    /// Currently active mode.
    #[must_use]
    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    /// Current fly speed in units per second (0 when not flying).
    #[must_use]
    pub fn fly_speed(&self) -> f32 {
        self.fly_speed
    }

    /// Camera-local motion from the held fly keys.
    #[must_use]
    pub fn motion(&self) -> Vec3 {
        self.held.motion()
    }

    /// Whether the current zoom drag was started with Alt + right button.
    #[must_use]
    pub fn zoom_from_right_button(&self) -> bool {
        self.mode == ControllerMode::Zoom && self.zoom.right_button
    }

    /// Drop the active mode and all held motion.
    pub fn reset(&mut self) {
        if self.mode.is_active() {
            log::debug!("camera mode {:?} -> None", self.mode);
        }
        self.mode = ControllerMode::None;
        self.held.clear();
    }

    /// Apply one input event.
    ///
    /// Returns the updated camera and whether the event was consumed; a
    /// consumed event should not reach other handlers.
    #[must_use]
    pub fn handle_event(
        &mut self,
        camera: CameraState,
        event: &InputEvent,
        viewport: Viewport,
    ) -> (CameraState, bool) {
        match event {
            InputEvent::MouseDown { button, modifiers } => {
                self.begin_drag(&camera, *button, *modifiers);
                (camera, false)
            }
            InputEvent::MouseUp { .. } => {
                self.reset();
                (camera, true)
            }
            InputEvent::MouseDrag { delta, modifiers } => {
                (self.drag(camera, *delta, *modifiers, viewport), true)
            }
            InputEvent::Scroll { delta } => {
                (self.scroll(camera, delta.y), true)
            }
            InputEvent::KeyDown { key } => (camera, self.key(key, true)),
            InputEvent::KeyUp { key } => (camera, self.key(key, false)),
        }
    }

    /// Advance fly motion by `elapsed` seconds.
    ///
    /// Runs in every mode while fly keys are held. With no motion held the
    /// fly speed resets and the camera is returned unchanged.
    #[must_use]
    pub fn tick(
        &mut self,
        mut camera: CameraState,
        elapsed: f32,
        modifiers: Modifiers,
    ) -> CameraState {
        let step = fly_step(
            self.held.motion(),
            elapsed,
            self.fly_speed,
            modifiers.shift,
            &self.options,
        );
        self.fly_speed = step.speed;
        if step.displacement != Vec3::ZERO {
            camera.pivot += camera.rotation * step.displacement;
            log::trace!(
                "fly {:.3}s at {:.2}/s -> pivot {}",
                elapsed,
                step.speed,
                camera.pivot
            );
        }
        camera
    }

    /// Per-layout fly update driven by a caller-owned timer.
    ///
    /// The timer restarts while no motion is held, so acceleration starts
    /// cleanly after a pause.
    #[must_use]
    pub fn layout(
        &mut self,
        camera: CameraState,
        timer: &mut FlyTimer,
        modifiers: Modifiers,
    ) -> CameraState {
        let elapsed = if self.held.motion() == Vec3::ZERO {
            timer.restart();
            0.0
        } else {
            timer.sample()
        };
        self.tick(camera, elapsed, modifiers)
    }

    fn begin_drag(
        &mut self,
        camera: &CameraState,
        button: MouseButton,
        modifiers: Modifiers,
    ) {
        let selection = select_mode(button, modifiers, self.platform);
        if selection.mode == ControllerMode::Zoom {
            let min_speed = self.options.min_zoom_speed;
            self.zoom = ZoomDrag {
                start_zoom: camera.view_size,
                zoom_speed: camera.view_size.abs().max(min_speed),
                total_motion: 0.0,
                right_button: selection.right_button,
            };
        }
        if selection.mode != self.mode {
            log::debug!("camera mode {:?} -> {:?}", self.mode, selection.mode);
        }
        self.mode = selection.mode;
    }

    fn drag(
        &mut self,
        camera: CameraState,
        delta: Vec2,
        modifiers: Modifiers,
        viewport: Viewport,
    ) -> CameraState {
        if delta == Vec2::ZERO {
            return camera;
        }
        match self.mode {
            ControllerMode::None => camera,
            ControllerMode::Orbit => self.orbit(camera, delta),
            ControllerMode::Fly => self.fly_look(camera, delta),
            ControllerMode::Pan => {
                self.pan(camera, delta, modifiers.shift, viewport)
            }
            ControllerMode::Zoom => {
                self.zoom_drag(camera, delta, modifiers.shift)
            }
        }
    }

    fn orbit(&self, mut camera: CameraState, delta: Vec2) -> CameraState {
        camera.rotation =
            orbit_rotation(camera.rotation, delta, self.options.orbit_speed);
        camera
    }

    /// Same rotation as orbit, but around the eye instead of the pivot.
    fn fly_look(&self, mut camera: CameraState, delta: Vec2) -> CameraState {
        let eye = camera.position();
        camera.rotation =
            orbit_rotation(camera.rotation, delta, self.options.orbit_speed);
        camera.pivot = eye + camera.forward() * camera.distance_from_pivot();
        camera
    }

    fn pan(
        &self,
        mut camera: CameraState,
        delta: Vec2,
        fast: bool,
        viewport: Viewport,
    ) -> CameraState {
        let screen = camera.world_to_screen(viewport, camera.pivot)
            + Vec3::new(-delta.x, delta.y, 0.0);
        let mut world_delta =
            camera.screen_to_world(viewport, screen) - camera.pivot;
        if fast {
            world_delta *= self.options.pan_fast_multiplier;
        }
        camera.pivot += world_delta;
        camera
    }

    fn zoom_drag(
        &mut self,
        mut camera: CameraState,
        delta: Vec2,
        fast: bool,
    ) -> CameraState {
        let gain = if fast {
            self.options.zoom_drag_fast_gain
        } else {
            self.options.zoom_drag_gain
        };
        let zoom_delta = nice_zoom_delta(delta) * gain;
        self.zoom.total_motion += zoom_delta;
        // No clamp: the view size may reach zero or go negative here.
        let total = self.zoom.total_motion;
        if total < 0.0 {
            camera.view_size = self.zoom.start_zoom
                * total.mul_add(self.options.zoom_shrink_rate, 1.0);
        } else {
            camera.view_size +=
                zoom_delta * self.zoom.zoom_speed * self.options.zoom_grow_rate;
        }
        camera
    }

    fn scroll(&self, mut camera: CameraState, scroll_y: f32) -> CameraState {
        let cutoff = self.options.scroll_min_step;
        let mut relative =
            camera.view_size.abs() * scroll_y * self.options.scroll_zoom_rate;
        if relative > 0.0 && relative < cutoff {
            relative = cutoff;
        } else if relative < 0.0 && relative > -cutoff {
            relative = -cutoff;
        }
        camera.view_size += relative;
        camera
    }

    /// Returns whether the key was consumed.
    fn key(&mut self, key: &str, pressed: bool) -> bool {
        match self.keybindings.lookup(key) {
            Some(KeyAction::Cancel) => {
                if pressed {
                    self.reset();
                }
                false
            }
            Some(action) => {
                if self.held.set(action, pressed) {
                    log::trace!("fly motion {}", self.held.motion());
                }
                true
            }
            None => false,
        }
    }
}

/// Pitch about the camera's right axis, then yaw about world up.
///
/// Shared by orbit and fly-look so both modes turn identically. Both
/// deltas are negated: with forward on `-Z`, a positive angle turns left
/// about `+Y` and up about `+X`, while the drag is right/down positive.
fn orbit_rotation(rotation: Quat, delta: Vec2, speed: f32) -> Quat {
    let pitch = Quat::from_axis_angle(rotation * Vec3::X, -delta.y * speed);
    let rotation = pitch * rotation;
    let yaw = Quat::from_axis_angle(Vec3::Y, -delta.x * speed);
    yaw * rotation
}

/// Drag distance along the dominant axis; right/down zooms out.
fn nice_zoom_delta(delta: Vec2) -> f32 {
    if delta.x.abs() > delta.y.abs() {
        delta.x
    } else {
        delta.y
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    const EPS: f32 = 1e-4;
    const VIEWPORT: Viewport = Viewport::from_size(800.0, 600.0);

    fn controller() -> CameraController {
        CameraController::default().with_platform(Platform::Other)
    }

    fn camera(view_size: f32) -> CameraState {
        CameraState {
            pivot: Vec3::new(1.0, 0.5, -2.0),
            rotation: Quat::from_rotation_y(0.4),
            view_size,
            field_of_view: 60.0,
        }
    }

    fn down(button: MouseButton, modifiers: Modifiers) -> InputEvent {
        InputEvent::MouseDown { button, modifiers }
    }

    fn drag(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseDrag {
            delta: Vec2::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    fn key_down(key: &str) -> InputEvent {
        InputEvent::KeyDown { key: key.into() }
    }

    fn send(
        ctrl: &mut CameraController,
        cam: CameraState,
        events: &[InputEvent],
    ) -> CameraState {
        events
            .iter()
            .fold(cam, |cam, event| ctrl.handle_event(cam, event, VIEWPORT).0)
    }

    #[test]
    fn mouse_down_selects_mode_and_is_not_consumed() {
        let mut ctrl = controller();
        let (_, consumed) = ctrl.handle_event(
            camera(10.0),
            &down(MouseButton::Middle, Modifiers::NONE),
            VIEWPORT,
        );
        assert!(!consumed);
        assert_eq!(ctrl.mode(), ControllerMode::Pan);
    }

    #[test]
    fn mode_is_reevaluated_on_every_press() {
        let mut ctrl = controller();
        let cam = camera(10.0);
        let _ = send(&mut ctrl, cam, &[down(MouseButton::Left, Modifiers::NONE)]);
        assert_eq!(ctrl.mode(), ControllerMode::Orbit);
        let _ = send(&mut ctrl, cam, &[down(MouseButton::Right, Modifiers::NONE)]);
        assert_eq!(ctrl.mode(), ControllerMode::Fly);
        let _ = send(&mut ctrl, cam, &[down(MouseButton::Other(5), Modifiers::NONE)]);
        assert_eq!(ctrl.mode(), ControllerMode::None);
    }

    #[test]
    fn mouse_up_always_returns_to_none() {
        let presses = [
            down(MouseButton::Left, Modifiers::NONE),
            down(MouseButton::Right, Modifiers::NONE),
            down(MouseButton::Middle, Modifiers::NONE),
            down(MouseButton::Right, Modifiers::ALT),
        ];
        for press in presses {
            let mut ctrl = controller();
            let _ = send(&mut ctrl, camera(10.0), &[press]);
            assert!(ctrl.mode().is_active());
            let (_, consumed) = ctrl.handle_event(
                camera(10.0),
                &InputEvent::MouseUp {
                    button: MouseButton::Left,
                },
                VIEWPORT,
            );
            assert!(consumed);
            assert_eq!(ctrl.mode(), ControllerMode::None);
        }
    }

    #[test]
    fn escape_cancels_mode_and_motion() {
        let mut ctrl = controller();
        let _ = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::NONE), key_down("KeyW")],
        );
        assert_ne!(ctrl.motion(), Vec3::ZERO);

        let (_, consumed) =
            ctrl.handle_event(camera(10.0), &key_down("Escape"), VIEWPORT);
        assert!(!consumed);
        assert_eq!(ctrl.mode(), ControllerMode::None);
        assert_eq!(ctrl.motion(), Vec3::ZERO);
    }

    #[test]
    fn orbit_rotates_and_keeps_pivot() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let cam = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Left, Modifiers::NONE), drag(100.0, 0.0)],
        );
        assert_eq!(cam.pivot, start.pivot);
        let expected = Quat::from_rotation_y(-0.3) * start.rotation;
        assert!(cam.rotation.angle_between(expected) < EPS);
    }

    #[test]
    fn orbit_pitch_turns_about_camera_right() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let cam = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Left, Modifiers::NONE), drag(0.0, 50.0)],
        );
        // Pitch leaves the right axis in place.
        assert!((cam.right() - start.right()).length() < EPS);
        assert!((cam.forward().angle_between(start.forward()) - 0.15).abs() < EPS);
    }

    #[test]
    fn fly_look_turns_with_the_mouse() {
        let start = CameraState::default();

        let mut ctrl = controller();
        let cam = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Right, Modifiers::NONE), drag(100.0, 0.0)],
        );
        assert!(cam.forward().x > 0.0, "right drag looks right");
        assert!(cam.forward().y.abs() < EPS);

        let mut ctrl = controller();
        let cam = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Right, Modifiers::NONE), drag(0.0, 100.0)],
        );
        assert!(cam.forward().y < 0.0, "down drag looks down");
        assert!(cam.forward().x.abs() < EPS);
    }

    #[test]
    fn orbit_and_fly_share_orientation_but_not_pivot() {
        let deltas = [drag(12.0, -7.0), drag(-3.0, 25.0), drag(40.0, 4.0)];
        let start = camera(10.0);

        let mut orbit = controller();
        let mut events = vec![down(MouseButton::Left, Modifiers::NONE)];
        events.extend(deltas.iter().cloned());
        let orbited = send(&mut orbit, start, &events);

        let mut fly = controller();
        events[0] = down(MouseButton::Right, Modifiers::NONE);
        let flown = send(&mut fly, start, &events);

        assert_eq!(orbited.rotation, flown.rotation);
        assert_eq!(orbited.pivot, start.pivot);
        assert!((flown.position() - start.position()).length() < EPS);
        assert!((flown.pivot - start.pivot).length() > 0.1);
    }

    #[test]
    fn pan_moves_pivot_in_view_plane() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let cam = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Middle, Modifiers::NONE), drag(20.0, 0.0)],
        );
        let moved = cam.pivot - start.pivot;
        // Dragging right slides the pivot left so the scene follows the
        // cursor.
        assert!(moved.dot(start.right()) < 0.0);
        assert!(moved.dot(start.forward()).abs() < EPS);
        assert_eq!(cam.rotation, start.rotation);
    }

    #[test]
    fn pan_with_shift_moves_four_times_as_far() {
        let start = camera(10.0);
        let mut slow = controller();
        let slow_cam = send(
            &mut slow,
            start,
            &[down(MouseButton::Middle, Modifiers::NONE), drag(0.0, 15.0)],
        );

        let mut fast = controller();
        let _ = send(&mut fast, start, &[down(MouseButton::Middle, Modifiers::NONE)]);
        let (fast_cam, consumed) = fast.handle_event(
            start,
            &InputEvent::MouseDrag {
                delta: Vec2::new(0.0, 15.0),
                modifiers: Modifiers::SHIFT,
            },
            VIEWPORT,
        );
        assert!(consumed);

        let slow_delta = slow_cam.pivot - start.pivot;
        let fast_delta = fast_cam.pivot - start.pivot;
        assert!(slow_delta.dot(start.up()) > 0.0);
        assert!((fast_delta - slow_delta * 4.0).length() < EPS);
    }

    fn unit_gain() -> CameraController {
        let mut options = Options::default();
        options.camera.zoom_drag_gain = 1.0;
        CameraController::new(&options).with_platform(Platform::Other)
    }

    #[test]
    fn zoom_out_grows_linearly_with_captured_speed() {
        let mut ctrl = unit_gain();
        let cam = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::ALT), drag(0.0, 100.0)],
        );
        assert!(ctrl.zoom_from_right_button());
        assert!((cam.view_size - 13.0).abs() < EPS);
    }

    #[test]
    fn zoom_in_shrinks_from_start_size() {
        let mut ctrl = unit_gain();
        let cam = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::ALT), drag(0.0, -500.0)],
        );
        assert!((cam.view_size - 5.0).abs() < EPS);
    }

    #[test]
    fn zoom_uses_dominant_axis_and_default_gain() {
        let mut ctrl = controller();
        let cam = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::ALT), drag(20.0, -5.0)],
        );
        // 20 px * 3 = 60 units of motion, 60 * 10 * 0.003 = 1.8
        assert!((cam.view_size - 11.8).abs() < EPS);
    }

    #[test]
    fn zoom_with_shift_uses_fast_gain() {
        let mut ctrl = controller();
        let _ = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::ALT)],
        );
        let (cam, consumed) = ctrl.handle_event(
            camera(10.0),
            &InputEvent::MouseDrag {
                delta: Vec2::new(0.0, 10.0),
                modifiers: Modifiers::SHIFT,
            },
            VIEWPORT,
        );
        assert!(consumed);
        // 10 px * 9 = 90 units of motion, 90 * 10 * 0.003 = 2.7
        assert!((cam.view_size - 12.7).abs() < EPS);
    }

    #[test]
    fn zoom_speed_has_a_floor() {
        let mut ctrl = unit_gain();
        let cam = send(
            &mut ctrl,
            camera(0.1),
            &[down(MouseButton::Right, Modifiers::ALT), drag(0.0, 100.0)],
        );
        // speed = max(0.1, 0.3)
        assert!((cam.view_size - (0.1 + 100.0 * 0.3 * 0.003)).abs() < EPS);
    }

    #[test]
    fn mac_control_click_zooms() {
        let mut ctrl =
            CameraController::default().with_platform(Platform::MacOs);
        let _ = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Left, Modifiers::CONTROL)],
        );
        assert_eq!(ctrl.mode(), ControllerMode::Zoom);
        assert!(!ctrl.zoom_from_right_button());
    }

    #[test]
    fn zoom_drag_reaches_zero_and_goes_negative_without_clamp() {
        let mut ctrl = unit_gain();
        let mut cam = send(
            &mut ctrl,
            camera(10.0),
            &[down(MouseButton::Right, Modifiers::ALT), drag(0.0, -1000.0)],
        );
        assert!(cam.view_size.abs() < EPS);

        cam = send(&mut ctrl, cam, &[drag(0.0, -500.0)]);
        assert!((cam.view_size + 5.0).abs() < EPS);
    }

    #[test]
    fn scroll_floors_small_steps() {
        let mut ctrl = controller();
        let (cam, consumed) = ctrl.handle_event(
            camera(10.0),
            &InputEvent::Scroll {
                delta: Vec2::new(0.0, 1.0),
            },
            VIEWPORT,
        );
        assert!(consumed);
        assert!((cam.view_size - 10.3).abs() < EPS);

        let (cam, _) = ctrl.handle_event(
            camera(10.0),
            &InputEvent::Scroll {
                delta: Vec2::new(0.0, -1.0),
            },
            VIEWPORT,
        );
        assert!((cam.view_size - 9.7).abs() < EPS);
    }

    #[test]
    fn scroll_large_steps_scale_with_view_size() {
        let mut ctrl = controller();
        let (cam, _) = ctrl.handle_event(
            camera(100.0),
            &InputEvent::Scroll {
                delta: Vec2::new(0.0, 2.0),
            },
            VIEWPORT,
        );
        assert!((cam.view_size - 103.0).abs() < EPS);
    }

    #[test]
    fn zero_scroll_changes_nothing() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let (cam, _) = ctrl.handle_event(
            start,
            &InputEvent::Scroll { delta: Vec2::ZERO },
            VIEWPORT,
        );
        assert_eq!(cam, start);
    }

    #[test]
    fn zero_delta_drags_are_idempotent_in_every_mode() {
        let presses = [
            down(MouseButton::Left, Modifiers::NONE),
            down(MouseButton::Right, Modifiers::NONE),
            down(MouseButton::Middle, Modifiers::NONE),
            down(MouseButton::Right, Modifiers::ALT),
            down(MouseButton::Other(3), Modifiers::NONE),
        ];
        for press in presses {
            let mut ctrl = controller();
            let start = camera(10.0);
            let cam = send(&mut ctrl, start, &[press, drag(0.0, 0.0), drag(0.0, 0.0)]);
            assert_eq!(cam, start, "{:?}", ctrl.mode());
        }
    }

    #[test]
    fn drags_are_consumed_even_without_a_mode() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let (cam, consumed) = ctrl.handle_event(start, &drag(5.0, 5.0), VIEWPORT);
        assert!(consumed);
        assert_eq!(cam, start);
    }

    #[test]
    fn fly_tick_moves_pivot_in_camera_space() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let _ = send(&mut ctrl, start, &[key_down("KeyW")]);

        let cam = ctrl.tick(start, 0.5, Modifiers::NONE);
        assert_eq!(ctrl.fly_speed(), 9.0);
        let expected = start.pivot + start.forward() * 4.5;
        assert!((cam.pivot - expected).length() < EPS);
    }

    #[test]
    fn fly_accelerates_while_held_and_resets_on_release() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let _ = send(&mut ctrl, start, &[key_down("KeyD")]);
        let cam = ctrl.tick(start, 0.1, Modifiers::NONE);
        let cam = ctrl.tick(cam, 1.0, Modifiers::SHIFT);
        assert!((ctrl.fly_speed() - 9.9).abs() < EPS);
        assert!(cam.pivot.distance(start.pivot) > 9.9 * 5.0);

        let (_, consumed) = ctrl.handle_event(
            cam,
            &InputEvent::KeyUp { key: "KeyD".into() },
            VIEWPORT,
        );
        assert!(consumed);
        let after = ctrl.tick(cam, 1.0, Modifiers::NONE);
        assert_eq!(after, cam);
        assert_eq!(ctrl.fly_speed(), 0.0);
    }

    #[test]
    fn fly_runs_regardless_of_drag_mode() {
        let mut ctrl = controller();
        let start = camera(10.0);
        let _ = send(
            &mut ctrl,
            start,
            &[down(MouseButton::Middle, Modifiers::NONE), key_down("KeyE")],
        );
        let cam = ctrl.tick(start, 1.0, Modifiers::NONE);
        assert!((cam.pivot - (start.pivot + start.up() * 9.0)).length() < EPS);
        assert_eq!(ctrl.mode(), ControllerMode::Pan);
    }

    #[test]
    fn layout_without_motion_restarts_timer() {
        let mut ctrl = controller();
        let mut timer = FlyTimer::new();
        let start = camera(10.0);
        let cam = ctrl.layout(start, &mut timer, Modifiers::NONE);
        assert_eq!(cam, start);
        assert_eq!(ctrl.fly_speed(), 0.0);
    }

    #[test]
    fn layout_samples_timer_while_motion_is_held() {
        let mut ctrl = controller();
        let mut timer = FlyTimer::new();
        let start = camera(10.0);
        let _ = send(&mut ctrl, start, &[key_down("KeyW")]);

        thread::sleep(Duration::from_millis(20));
        let cam = ctrl.layout(start, &mut timer, Modifiers::NONE);
        assert_eq!(ctrl.fly_speed(), 9.0);
        let moved = cam.pivot - start.pivot;
        assert!(moved.dot(start.forward()) > 9.0 * 0.015);
        assert!(moved.cross(start.forward()).length() < EPS);

        thread::sleep(Duration::from_millis(10));
        let again = ctrl.layout(cam, &mut timer, Modifiers::NONE);
        assert!(ctrl.fly_speed() > 9.0);
        assert!((again.pivot - cam.pivot).dot(start.forward()) > 0.0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut ctrl = controller();
        let (_, consumed) =
            ctrl.handle_event(camera(10.0), &key_down("KeyZ"), VIEWPORT);
        assert!(!consumed);
        assert_eq!(ctrl.motion(), Vec3::ZERO);
    }

    #[test]
    fn rebound_keys_take_effect_after_set_options() {
        let mut ctrl = controller();
        let mut options = Options::default();
        options.keybindings.bind(KeyAction::MoveForward, "ArrowUp");
        ctrl.set_options(&options);
        let _ = send(&mut ctrl, camera(10.0), &[key_down("ArrowUp")]);
        assert_eq!(ctrl.motion(), Vec3::NEG_Z);
    }
}
