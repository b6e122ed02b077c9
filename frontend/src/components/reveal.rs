use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Element, Window};
use yew::prelude::*;

const STAGGER_MS: u32 = 200;
const ITEM_DURATION_MS: u32 = 600;
const PARENT_DURATION_MS: u32 = 300;
const OFFSET_PX: u32 = 20;

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl Region {
    /// Share of the region that is on screen. A region taller than the
    /// viewport counts as fully visible once it fills the screen.
    pub fn visible_fraction(&self) -> f64 {
        if self.height <= 0.0 || self.viewport_height <= 0.0 {
            return 0.0;
        }

        let visible_top = self.top.max(0.0);
        let visible_bottom = (self.top + self.height).min(self.viewport_height);
        let visible = (visible_bottom - visible_top).max(0.0);

        (visible / self.height.min(self.viewport_height)).clamp(0.0, 1.0)
    }
}

/// One-way "has entered the viewport" flag owned by a section.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceLatch {
    threshold: f64,
    entered: bool,
}

impl EntranceLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            entered: false,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feeds one measurement; returns `true` only on the call that flips the latch.
    pub fn observe(&mut self, region: Region) -> bool {
        if self.entered {
            return false;
        }
        // Zero threshold still needs some overlap.
        let fraction = region.visible_fraction();
        if fraction > 0.0 && fraction >= self.threshold {
            self.entered = true;
            return true;
        }
        false
    }
}

/// Position of an element in a section's entrance sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    /// Container-level affordances: fade only, always first.
    Parent,
    /// Content, shown in index order once the parent has faded in.
    Child(u32),
}

impl Stagger {
    pub fn delay_ms(self) -> u32 {
        match self {
            Stagger::Parent => 0,
            Stagger::Child(index) => PARENT_DURATION_MS + index * STAGGER_MS,
        }
    }

    /// Inline style for the hidden (offset, transparent) or resting state.
    pub fn style(self, entered: bool) -> String {
        let delay = self.delay_ms();
        match self {
            Stagger::Parent => format!(
                "opacity: {}; transition: opacity {}ms ease-out {}ms;",
                if entered { 1 } else { 0 },
                PARENT_DURATION_MS,
                delay
            ),
            Stagger::Child(_) => format!(
                "opacity: {}; transform: translateY({}px); transition: opacity {dur}ms ease-out {delay}ms, transform {dur}ms ease-out {delay}ms;",
                if entered { 1 } else { 0 },
                if entered { 0 } else { OFFSET_PX },
                dur = ITEM_DURATION_MS,
                delay = delay,
            ),
        }
    }
}

fn measure(node: &NodeRef) -> Option<Region> {
    let element = node.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(Region {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

const TRIGGER_EVENTS: [&str; 2] = ["scroll", "resize"];

fn attach(window: &Window, function: &Function) {
    for event in TRIGGER_EVENTS {
        let _ = window.add_event_listener_with_callback(event, function);
    }
}

fn detach(window: &Window, function: &Function) {
    for event in TRIGGER_EVENTS {
        let _ = window.remove_event_listener_with_callback(event, function);
    }
}

/// Returns whether the element behind `node` has entered the viewport. Flips
/// to `true` once and stays there for the lifetime of the component. The
/// scroll and resize listeners come off as soon as it flips.
#[hook]
pub fn use_entrance(node: &NodeRef, threshold: f64) -> bool {
    let latch = use_mut_ref(|| EntranceLatch::new(threshold));
    let entered = use_state_eq(|| false);

    {
        let node = node.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let attached: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

                let check = {
                    let latch = latch.clone();
                    let window = window.clone();
                    let attached = attached.clone();
                    move || {
                        if latch.borrow().has_entered() {
                            return;
                        }
                        let Some(region) = measure(&node) else {
                            return;
                        };
                        if !latch.borrow_mut().observe(region) {
                            return;
                        }
                        entered.set(true);
                        // The closure itself stays alive until unmount; only the listeners go.
                        let function = attached.borrow_mut().take();
                        if let (Some(window), Some(function)) = (&window, function) {
                            detach(window, &function);
                        }
                    }
                };
                // Sections already on screen at load animate right away.
                check();

                let listener = match window {
                    Some(window) if !latch.borrow().has_entered() => {
                        let callback = Closure::<dyn Fn()>::new(check);
                        let function = callback.as_ref().unchecked_ref::<Function>().clone();
                        attach(&window, &function);
                        *attached.borrow_mut() = Some(function);
                        Some((window, callback))
                    }
                    _ => None,
                };

                move || {
                    if let Some((window, _callback)) = listener {
                        if let Some(function) = attached.borrow_mut().take() {
                            detach(&window, &function);
                        }
                    }
                }
            },
            (),
        );
    }

    *entered
}

/// Plays the entrance right after the first render, for content above the fold.
#[hook]
pub fn use_entrance_on_mount() -> bool {
    let entered = use_state_eq(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                entered.set(true);
                || ()
            },
            (),
        );
    }
    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64, height: f64) -> Region {
        Region {
            top,
            height,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn fraction_below_and_above_viewport_is_zero() {
        assert_eq!(at(900.0, 400.0).visible_fraction(), 0.0);
        assert_eq!(at(-500.0, 400.0).visible_fraction(), 0.0);
    }

    #[test]
    fn fraction_counts_overlap() {
        assert_eq!(at(0.0, 400.0).visible_fraction(), 1.0);
        assert_eq!(at(700.0, 400.0).visible_fraction(), 0.25);
        assert_eq!(at(-300.0, 400.0).visible_fraction(), 0.25);
    }

    #[test]
    fn tall_region_is_measured_against_viewport() {
        assert_eq!(at(-1000.0, 4000.0).visible_fraction(), 1.0);
        assert_eq!(at(600.0, 4000.0).visible_fraction(), 0.25);
    }

    #[test]
    fn degenerate_regions_are_invisible() {
        assert_eq!(at(100.0, 0.0).visible_fraction(), 0.0);
        let no_viewport = Region { top: 0.0, height: 100.0, viewport_height: 0.0 };
        assert_eq!(no_viewport.visible_fraction(), 0.0);
    }

    #[test]
    fn latch_waits_for_threshold() {
        let mut latch = EntranceLatch::new(0.2);
        assert!(!latch.observe(at(780.0, 400.0))); // 5%
        assert!(!latch.has_entered());
        assert!(latch.observe(at(700.0, 400.0))); // 25%
        assert!(latch.has_entered());
    }

    #[test]
    fn latch_flips_exactly_once() {
        let mut latch = EntranceLatch::new(0.2);
        assert!(latch.observe(at(0.0, 400.0)));
        assert!(!latch.observe(at(0.0, 400.0)));
        assert!(!latch.observe(at(100.0, 400.0)));
    }

    #[test]
    fn latch_never_resets_for_any_scroll_sequence() {
        // Deterministic pseudo-random scroll positions, up and down.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..200 {
            let mut latch = EntranceLatch::new(0.2);
            let mut seen_entry = false;
            for _ in 0..50 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let top = (seed % 4000) as f64 - 2000.0;
                latch.observe(at(top, 600.0));
                if latch.has_entered() {
                    seen_entry = true;
                }
                assert_eq!(latch.has_entered(), seen_entry);
            }
        }
    }

    #[test]
    fn zero_threshold_still_requires_overlap() {
        let mut latch = EntranceLatch::new(0.0);
        assert!(!latch.observe(at(900.0, 100.0)));
        assert!(latch.observe(at(799.0, 100.0)));
    }

    #[test]
    fn parent_leads_children_in_order() {
        let delays: Vec<u32> = [Stagger::Parent, Stagger::Child(0), Stagger::Child(1), Stagger::Child(2)]
            .iter()
            .map(|s| s.delay_ms())
            .collect();
        assert_eq!(delays, [0, 300, 500, 700]);
    }

    #[test]
    fn styles_move_from_hidden_to_resting() {
        let hidden = Stagger::Child(1).style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(20px)"));

        let shown = Stagger::Child(1).style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translateY(0px)"));
        assert!(shown.contains("500ms"));

        assert!(!Stagger::Parent.style(false).contains("transform"));
    }
}
