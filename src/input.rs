use log::trace;

/// Consumer of board clicks, implemented by the move-selection logic.
/// Coordinates are raw window pixels; translating them to cells is the
/// consumer's business (`BoardLayout::cell_at` is the usual tool).
pub trait ClickHandler {
    fn handle_click(&mut self, x: f32, y: f32);
}

impl<H: ClickHandler + ?Sized> ClickHandler for &mut H {
    fn handle_click(&mut self, x: f32, y: f32) {
        (**self).handle_click(x, y);
    }
}

/// Forwards each left-click to the handler, once per click event.
pub struct InputDispatcher<H: ClickHandler> {
    handler: H,
}

impl<H: ClickHandler> InputDispatcher<H> {
    pub fn new(handler: H) -> InputDispatcher<H> {
        InputDispatcher { handler }
    }

    pub fn dispatch(&mut self, x: f32, y: f32) {
        trace!("click at ({x}, {y})");
        self.handler.handle_click(x, y);
    }
}
