// Event wiring for everything on the page that isn't the particle
// backdrop: loading screen, headline typewriter, navigation, stat
// counters, card search/filter, popups, contact form, smooth scroll,
// tilt-on-hover, scroll progress, and lazy images. Every feature looks
// up its own elements and quietly skips itself when they are missing,
// so one absent element never disables anything else.

use crate::events::ListenerHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions, Window,
};

const HEADLINE: &str = "WE RUN YOUR APP";
const HEADLINE_TYPE_MS: i32 = 100;
const LOADING_HOLD_MS: i32 = 2000;
const LOADING_FADE_MS: i32 = 500;
const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
const SMOOTH_SCROLL_OFFSET: f64 = 80.0;
const COUNTER_DURATION_MS: f64 = 2000.0;
const COUNTER_STEP_MS: f64 = 16.0;
const CONTACT_ACK: &str =
    "Your message has been sent successfully! We will get back to you as soon as possible.";
const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
     background: linear-gradient(90deg, #667eea 0%, #764ba2 50%, #f093fb 100%); \
     z-index: 9999; transition: width 0.1s ease;";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct PageController {
    window: Window,
    document: Document,
    listeners: Vec<ListenerHandle>,
    window_fns: Vec<(&'static str, Closure<dyn FnMut()>)>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl PageController {
    pub fn mount() -> Result<PageController, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut controller = PageController {
            window,
            document,
            listeners: Vec::new(),
            window_fns: Vec::new(),
            observers: Vec::new(),
        };

        controller.init_scroll_trigger_library();
        controller.wire_loading_screen()?;
        controller.wire_headline()?;
        controller.wire_navigation()?;
        controller.wire_counters()?;
        controller.wire_search_filter()?;
        controller.wire_popups()?;
        controller.wire_contact_form()?;
        controller.wire_smooth_scroll()?;
        controller.wire_tilt(".app-card", Some(".app-card-inner"), 20.0, "translateZ(10px)", "translateZ(0)")?;
        controller.wire_tilt(".feature-card", None, 15.0, "translateY(-10px)", "translateY(0)")?;
        controller.wire_scroll_progress()?;
        controller.wire_lazy_images()?;

        Ok(controller)
    }

    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(ListenerHandle::attach(target, event, f)?);
        Ok(())
    }

    fn install_window_fn<F>(&mut self, name: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        js_sys::Reflect::set(
            self.window.as_ref(),
            &JsValue::from_str(name),
            callback.as_ref(),
        )?;
        self.window_fns.push((name, callback));
        Ok(())
    }

    // The entrance-animation library is an optional page-level global; if
    // it is loaded we hand it the page's init options, otherwise entrance
    // animations are simply skipped.
    fn init_scroll_trigger_library(&self) {
        let aos = match js_sys::Reflect::get(self.window.as_ref(), &JsValue::from_str("AOS")) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return,
        };
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("duration"), &JsValue::from_f64(0.0));
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("once"), &JsValue::from_bool(true));
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("disable"), &JsValue::from_bool(true));
        if let Ok(init) = js_sys::Reflect::get(&aos, &JsValue::from_str("init")) {
            if let Some(init) = init.dyn_ref::<js_sys::Function>() {
                let _ = init.call1(&aos, &options);
            }
        }
    }

    // Delayed dismissal: hold, fade to transparent, then drop the element
    // out of layout once the fade has finished.
    fn wire_loading_screen(&self) -> Result<(), JsValue> {
        let screen = match element_by_id(&self.document, "loading-screen") {
            Some(screen) => screen,
            None => return Ok(()),
        };
        let window = self.window.clone();
        set_timeout(&self.window, LOADING_HOLD_MS, move || {
            let _ = screen.style().set_property("opacity", "0");
            let _ = set_timeout(&window, LOADING_FADE_MS, move || {
                let _ = screen.style().set_property("display", "none");
            });
        })?;
        Ok(())
    }

    fn wire_headline(&self) -> Result<(), JsValue> {
        let title = match element_by_id(&self.document, "main-title") {
            Some(title) => title,
            None => return Ok(()),
        };
        title.set_text_content(Some(""));
        let text: Vec<char> = HEADLINE.chars().collect();
        let shown = Cell::new(0usize);
        start_interval(&self.window, HEADLINE_TYPE_MS, move || {
            let n = shown.get() + 1;
            shown.set(n);
            let typed: String = text[..n].iter().collect();
            title.set_text_content(Some(&typed));
            n < text.len()
        })
    }

    fn wire_navigation(&mut self) -> Result<(), JsValue> {
        let toggle = element_by_id(&self.document, "nav-toggle");
        let menu = element_by_id(&self.document, "nav-menu");

        if let (Some(toggle), Some(menu)) = (toggle, menu) {
            let t = toggle.clone();
            let m = menu.clone();
            self.listen(toggle.as_ref(), "click", move |_| {
                let _ = m.class_list().toggle("active");
                let _ = t.class_list().toggle("active");
            })?;

            // tapping a link closes the mobile menu again
            for link in query_all::<Element>(&self.document, ".nav-link") {
                let t = toggle.clone();
                let m = menu.clone();
                self.listen(link.as_ref(), "click", move |_| {
                    let _ = m.class_list().remove_1("active");
                    let _ = t.class_list().remove_1("active");
                })?;
            }
        }

        if let Ok(Some(navbar)) = self.document.query_selector(".navbar") {
            let window = self.window.clone();
            let target = self.window.clone();
            self.listen(target.as_ref(), "scroll", move |_| {
                let scrolled = window.scroll_y().unwrap_or(0.0) > NAVBAR_SCROLL_THRESHOLD;
                if scrolled {
                    let _ = navbar.class_list().add_1("scrolled");
                } else {
                    let _ = navbar.class_list().remove_1("scrolled");
                }
            })?;
        }
        Ok(())
    }

    // Counters run once, the first time the stats section scrolls into
    // view; the observer lets go of the section afterwards.
    fn wire_counters(&mut self) -> Result<(), JsValue> {
        let stats = match self.document.query_selector(".hero-stats").ok().flatten() {
            Some(stats) => stats,
            None => return Ok(()),
        };
        let document = self.document.clone();
        let window = self.window.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    for stat in query_all::<HtmlElement>(&document, ".stat-number") {
                        animate_counter(&window, stat);
                    }
                    observer.unobserve(&entry.target());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(0.5));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&stats);
        self.observers.push((observer, callback));
        Ok(())
    }

    fn wire_search_filter(&mut self) -> Result<(), JsValue> {
        let cards = query_all::<HtmlElement>(&self.document, ".app-card");
        if cards.is_empty() {
            return Ok(());
        }
        let search = self
            .document
            .get_element_by_id("app-search")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let current = Rc::new(RefCell::new(String::from("all")));

        let apply: Rc<dyn Fn()> = {
            let cards = cards.clone();
            let search = search.clone();
            let current = Rc::clone(&current);
            Rc::new(move || {
                let term = search
                    .as_ref()
                    .map(|s| s.value().to_lowercase())
                    .unwrap_or_default();
                let filter = current.borrow().clone();
                for card in &cards {
                    let category = card.dataset().get("category").unwrap_or_default();
                    let title = text_of(card, ".app-title");
                    let description = text_of(card, ".app-description");
                    if card_matches(&filter, &category, &term, &title, &description) {
                        let _ = card.style().set_property("display", "block");
                        let _ = card.remove_attribute("data-hidden");
                    } else {
                        let _ = card.style().set_property("display", "none");
                        let _ = card.set_attribute("data-hidden", "true");
                    }
                }
            })
        };

        if let Some(input) = search {
            let apply = Rc::clone(&apply);
            self.listen(input.as_ref(), "input", move |_| apply())?;
        }

        let tags = query_all::<HtmlElement>(&self.document, ".filter-tag");
        for tag in &tags {
            let all = tags.clone();
            let this = tag.clone();
            let apply = Rc::clone(&apply);
            let current = Rc::clone(&current);
            self.listen(tag.as_ref(), "click", move |_| {
                for t in &all {
                    let _ = t.class_list().remove_1("active");
                }
                let _ = this.class_list().add_1("active");
                *current.borrow_mut() = this
                    .dataset()
                    .get("filter")
                    .unwrap_or_else(|| String::from("all"));
                apply();
            })?;
        }
        Ok(())
    }

    fn wire_popups(&mut self) -> Result<(), JsValue> {
        let features = element_by_id(&self.document, "features-popup");
        let contact = element_by_id(&self.document, "contact-popup");

        if let Some(popup) = &features {
            self.install_popup(popup.clone(), "openFeaturesPopup", "closeFeaturesPopup")?;
        }
        if let Some(popup) = &contact {
            self.install_popup(popup.clone(), "openContactPopup", "closeContactPopup")?;
        }

        // Escape closes whichever popup is currently shown.
        let popups: Vec<HtmlElement> = features.into_iter().chain(contact).collect();
        if !popups.is_empty() {
            let document = self.document.clone();
            let document_target = self.document.clone();
            self.listen(document_target.as_ref(), "keydown", move |event| {
                let key = match event.dyn_ref::<KeyboardEvent>() {
                    Some(key_event) => key_event.key(),
                    None => return,
                };
                if key != "Escape" {
                    return;
                }
                for popup in &popups {
                    let display = popup.style().get_property_value("display").unwrap_or_default();
                    if display == "block" {
                        close_popup(&document, popup);
                    }
                }
            })?;
        }
        Ok(())
    }

    // The page's markup calls these through inline onclick handlers, so
    // the open/close pairs are installed as window globals.
    fn install_popup(
        &mut self,
        popup: HtmlElement,
        open_name: &'static str,
        close_name: &'static str,
    ) -> Result<(), JsValue> {
        let document = self.document.clone();
        let p = popup.clone();
        self.install_window_fn(open_name, move || open_popup(&document, &p))?;

        let document = self.document.clone();
        let p = popup.clone();
        self.install_window_fn(close_name, move || close_popup(&document, &p))?;

        // a click on the dimmed backdrop (the popup element itself, not
        // its content) also closes it
        let document = self.document.clone();
        let p = popup.clone();
        self.listen(popup.as_ref(), "click", move |event| {
            let backdrop: &EventTarget = p.as_ref();
            if event.target().as_ref() == Some(backdrop) {
                close_popup(&document, &p);
            }
        })?;
        Ok(())
    }

    // There is no backend: submission acknowledges unconditionally,
    // resets the form, and closes the popup.
    fn wire_contact_form(&mut self) -> Result<(), JsValue> {
        let form = match self.document.get_element_by_id("contact-form") {
            Some(el) => match el.dyn_into::<HtmlFormElement>() {
                Ok(form) => form,
                Err(_) => return Ok(()),
            },
            None => return Ok(()),
        };
        let window = self.window.clone();
        let document = self.document.clone();
        let contact = element_by_id(&self.document, "contact-popup");
        let form_target = form.clone();
        self.listen(form_target.as_ref(), "submit", move |event| {
            event.prevent_default();
            let _ = window.alert_with_message(CONTACT_ACK);
            form.reset();
            if let Some(popup) = &contact {
                close_popup(&document, popup);
            }
        })?;
        Ok(())
    }

    fn wire_smooth_scroll(&mut self) -> Result<(), JsValue> {
        for anchor in query_all::<Element>(&self.document, "a[href^=\"#\"]") {
            let document = self.document.clone();
            let window = self.window.clone();
            let a = anchor.clone();
            self.listen(anchor.as_ref(), "click", move |event| {
                let href = match a.get_attribute("href") {
                    Some(href) if href != "#" => href,
                    _ => return,
                };
                event.prevent_default();
                let target = match document.query_selector(&href).ok().flatten() {
                    Some(target) => target,
                    None => return,
                };
                let target = match target.dyn_into::<HtmlElement>() {
                    Ok(target) => target,
                    Err(_) => return,
                };
                let top = target.offset_top() as f64 - SMOOTH_SCROLL_OFFSET;
                let mut options = ScrollToOptions::new();
                options.top(top).behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            })?;
        }
        Ok(())
    }

    // Perspective tilt following the pointer. `inner` selects a nested
    // element to transform; None transforms the card itself.
    fn wire_tilt(
        &mut self,
        selector: &str,
        inner: Option<&'static str>,
        divisor: f64,
        lift: &'static str,
        rest: &'static str,
    ) -> Result<(), JsValue> {
        for card in query_all::<HtmlElement>(&self.document, selector) {
            let surface = match inner {
                Some(inner_selector) => match card
                    .query_selector(inner_selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    Some(surface) => surface,
                    None => continue,
                },
                None => card.clone(),
            };

            let move_card = card.clone();
            let move_surface = surface.clone();
            self.listen(card.as_ref(), "mousemove", move |event| {
                let pointer = match event.dyn_ref::<MouseEvent>() {
                    Some(pointer) => pointer,
                    None => return,
                };
                let rect = move_card.get_bounding_client_rect();
                let x = pointer.client_x() as f64 - rect.left();
                let y = pointer.client_y() as f64 - rect.top();
                let transform = tilt_transform(rect.width(), rect.height(), x, y, divisor, lift);
                let _ = move_surface.style().set_property("transform", &transform);
            })?;

            let leave_surface = surface;
            self.listen(card.as_ref(), "mouseleave", move |_| {
                let transform = format!("perspective(1000px) rotateX(0) rotateY(0) {}", rest);
                let _ = leave_surface.style().set_property("transform", &transform);
            })?;
        }
        Ok(())
    }

    fn wire_scroll_progress(&mut self) -> Result<(), JsValue> {
        let body = match self.document.body() {
            Some(body) => body,
            None => return Ok(()),
        };
        let bar = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        bar.set_attribute("style", PROGRESS_BAR_STYLE)?;
        body.append_child(&bar)?;

        let root = match self.document.document_element() {
            Some(root) => root,
            None => return Ok(()),
        };
        let window = self.window.clone();
        let target = self.window.clone();
        self.listen(target.as_ref(), "scroll", move |_| {
            let pct = scroll_progress(
                window.scroll_y().unwrap_or(0.0),
                root.scroll_height() as f64,
                root.client_height() as f64,
            );
            let _ = bar.style().set_property("width", &format!("{}%", pct));
        })?;
        Ok(())
    }

    fn wire_lazy_images(&mut self) -> Result<(), JsValue> {
        let images = query_all::<HtmlImageElement>(&self.document, "img[data-src]");
        if images.is_empty() {
            return Ok(());
        }
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let image = match entry.target().dyn_into::<HtmlImageElement>() {
                        Ok(image) => image,
                        Err(_) => continue,
                    };
                    if let Some(src) = image.dataset().get("src") {
                        image.set_src(&src);
                        let _ = image.class_list().add_1("loaded");
                        observer.unobserve(&image);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image);
        }
        self.observers.push((observer, callback));
        Ok(())
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        for (name, _) in &self.window_fns {
            let _ = js_sys::Reflect::delete_property(
                self.window.unchecked_ref::<js_sys::Object>(),
                &JsValue::from_str(name),
            );
        }
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
        // listeners detach themselves as the Vec drops
    }
}

fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<T>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

fn text_of(card: &HtmlElement, selector: &str) -> String {
    card.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.to_lowercase())
        .unwrap_or_default()
}

fn open_popup(document: &Document, popup: &HtmlElement) {
    let _ = popup.style().set_property("display", "block");
    let _ = popup.style().set_property("opacity", "1");
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

fn close_popup(document: &Document, popup: &HtmlElement) {
    let _ = popup.style().set_property("display", "none");
    let _ = popup.style().set_property("opacity", "0");
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "auto");
    }
}

fn animate_counter(window: &Window, stat: HtmlElement) {
    let raw = match stat.dataset().get("target") {
        Some(raw) => raw,
        None => return,
    };
    let (target, plus) = match parse_counter_target(&raw) {
        Some(parsed) => parsed,
        None => return,
    };
    let increment = counter_increment(target, COUNTER_DURATION_MS, COUNTER_STEP_MS);
    let current = Cell::new(0.0f64);
    let _ = start_interval(window, COUNTER_STEP_MS as i32, move || {
        let next = current.get() + increment;
        if next >= target {
            let suffix = if plus { "+" } else { "" };
            stat.set_text_content(Some(&format!("{}{}", target, suffix)));
            false
        } else {
            current.set(next);
            stat.set_text_content(Some(&format!("{}", next.floor() as i64)));
            true
        }
    });
}

// One-shot timer; the closure is handed to the JS side and reclaimed
// after it fires.
fn set_timeout<F>(window: &Window, ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}

// Repeating timer that stops itself when `f` returns false. The closure
// leaks if the interval never finishes, which is fine for page-lifetime
// animations.
fn start_interval<F>(window: &Window, ms: i32, mut f: F) -> Result<(), JsValue>
where
    F: FnMut() -> bool + 'static,
{
    let clear_window = window.clone();
    let id = Rc::new(Cell::new(None::<i32>));
    let id_inner = Rc::clone(&id);
    let callback = Closure::wrap(Box::new(move || {
        if !f() {
            if let Some(handle) = id_inner.get() {
                clear_window.clear_interval_with_handle(handle);
            }
        }
    }) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms)?;
    id.set(Some(handle));
    callback.forget();
    Ok(())
}

pub(crate) fn card_matches(
    filter: &str,
    category: &str,
    term: &str,
    title: &str,
    description: &str,
) -> bool {
    let matches_filter = filter == "all" || category == filter;
    let matches_search = title.contains(term) || description.contains(term);
    matches_filter && matches_search
}

pub(crate) fn parse_counter_target(raw: &str) -> Option<(f64, bool)> {
    let plus = raw.contains('+');
    let value: f64 = raw.trim().trim_end_matches('+').parse().ok()?;
    Some((value, plus))
}

pub(crate) fn counter_increment(target: f64, duration_ms: f64, step_ms: f64) -> f64 {
    target / (duration_ms / step_ms)
}

pub(crate) fn tilt_transform(
    width: f64,
    height: f64,
    x: f64,
    y: f64,
    divisor: f64,
    lift: &str,
) -> String {
    let rotate_x = (y - height / 2.0) / divisor;
    let rotate_y = (width / 2.0 - x) / divisor;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) {}",
        rotate_x, rotate_y, lift
    )
}

pub(crate) fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        0.0
    } else {
        (scroll_y / track) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_matches_requires_both_filter_and_search() {
        assert!(card_matches("all", "games", "", "calc", "a calculator"));
        assert!(card_matches("games", "games", "calc", "calc pro", ""));
        assert!(!card_matches("tools", "games", "", "calc", ""));
        assert!(!card_matches("all", "games", "zzz", "calc", "a calculator"));
        // the search matches on description too
        assert!(card_matches("all", "games", "calculator", "calc", "a calculator"));
    }

    #[test]
    fn counter_target_parses_optional_plus_suffix() {
        assert_eq!(parse_counter_target("500+"), Some((500.0, true)));
        assert_eq!(parse_counter_target("42"), Some((42.0, false)));
        assert_eq!(parse_counter_target("not a number"), None);
    }

    #[test]
    fn counter_increment_spreads_target_over_frames() {
        // 2000ms at 16ms steps is 125 increments
        let increment = counter_increment(500.0, 2000.0, 16.0);
        assert!((increment - 4.0).abs() < 1e-12);
    }

    #[test]
    fn tilt_transform_rotates_away_from_center() {
        let transform = tilt_transform(200.0, 100.0, 200.0, 100.0, 20.0, "translateZ(10px)");
        assert_eq!(
            transform,
            "perspective(1000px) rotateX(2.5deg) rotateY(-5deg) translateZ(10px)"
        );
        // dead center produces no rotation
        let center = tilt_transform(200.0, 100.0, 100.0, 50.0, 20.0, "translateZ(10px)");
        assert_eq!(
            center,
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
        );
    }

    #[test]
    fn scroll_progress_is_a_percentage_of_the_track() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // degenerate page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
    }
}
