//=========================================================================
// Components
//=========================================================================
//
// Lifecycle contract between the game loop and game objects.
//
// Per session the loop calls, for the top-level `Game` first and then for
// every registered component in registration order:
//
// ```text
//   initialize ─> load ─> { update ─> draw ─> (game) handle_system_input }* ─> unload
// ```
//
// Unload runs in the same registration order, with the game last.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::platform_bridge::Backend;
use crate::core::time::FrameTiming;

//=== Component ===========================================================

/// A game object driven by the loop.
///
/// # Examples
///
/// ```
/// use ledge_engine::prelude::*;
///
/// struct Counter {
///     frames: u32,
/// }
///
/// impl<B: Backend> Component<B> for Counter {
///     fn update(&mut self, _ctx: &mut GameContext<'_, B>, _timing: &FrameTiming) {
///         self.frames += 1;
///     }
///
///     fn draw(&mut self, _ctx: &mut GameContext<'_, B>, _timing: &FrameTiming) {}
/// }
/// ```
pub trait Component<B: Backend> {
    /// Called once before loading.
    fn initialize(&mut self, _ctx: &mut GameContext<'_, B>) {}

    /// Called once before the window opens. Acquire assets here.
    fn load(&mut self, _ctx: &mut GameContext<'_, B>) {}

    /// Advances simulation by one frame.
    fn update(&mut self, ctx: &mut GameContext<'_, B>, timing: &FrameTiming);

    /// Draws the current frame. The surface is already cleared.
    fn draw(&mut self, ctx: &mut GameContext<'_, B>, timing: &FrameTiming);

    /// Called once after the loop stops.
    fn unload(&mut self, _ctx: &mut GameContext<'_, B>) {}
}

//=== Game ================================================================

/// The top-level game object.
pub trait Game<B: Backend>: Component<B> {
    /// Runs after every frame has been presented. Typical use: quitting on
    /// a key or on a window close request.
    fn handle_system_input(&mut self, _ctx: &mut GameContext<'_, B>, _timing: &FrameTiming) {}
}
