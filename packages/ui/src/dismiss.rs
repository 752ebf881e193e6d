//! Outside-click and escape-key dismissal for an open menu.
//!
//! While the menu is open, a `click` listener on the window and a `keyup`
//! listener on the document feed [`MenuEvent`]s into the menu signal. The
//! listeners live in a guard held by a signal owned by the calling component:
//! closing the menu replaces the guard with `None`, and unmounting the
//! component drops the signal. Either way the guard's `Drop` unregisters both
//! listeners.
//!
//! Off the browser there is no DOM to listen on and the hook does nothing.

use dioxus::prelude::*;

use crate::menu::MenuState;
#[cfg(target_arch = "wasm32")]
use crate::menu::{dispatch, MenuEvent};

/// Close `menu` on clicks outside the element with id `container_id` and on escape.
pub fn use_dismiss(menu: Signal<MenuState>, container_id: &'static str) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listeners = use_signal(|| None::<DismissListeners>);
        use_effect(move || {
            if menu().is_open() {
                let attached = DismissListeners::attach(menu, container_id);
                if attached.is_none() {
                    tracing::warn!(container_id, "could not register dismiss listeners");
                }
                listeners.set(attached);
            } else {
                listeners.set(None);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (menu, container_id);
    }
}

#[cfg(target_arch = "wasm32")]
struct DismissListeners {
    window: web_sys::Window,
    document: web_sys::Document,
    on_click: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_keyup: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl DismissListeners {
    fn attach(menu: Signal<MenuState>, container_id: &'static str) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let document = window.document()?;

        let click_document = document.clone();
        let mut click_menu = menu;
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |event: web_sys::MouseEvent| {
                let target = event.target();
                let inside = match (click_document.get_element_by_id(container_id), target) {
                    (Some(container), Some(target)) => {
                        container.contains(target.dyn_ref::<web_sys::Node>())
                    }
                    _ => false,
                };
                dispatch(&mut click_menu, MenuEvent::Pointer { inside });
            },
        );

        let mut key_menu = menu;
        let on_keyup = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                dispatch(&mut key_menu, MenuEvent::KeyUp(&key));
            },
        );

        let listeners = Self {
            window,
            document,
            on_click,
            on_keyup,
        };
        listeners
            .window
            .add_event_listener_with_callback("click", listeners.on_click.as_ref().unchecked_ref())
            .ok()?;
        listeners
            .document
            .add_event_listener_with_callback("keyup", listeners.on_keyup.as_ref().unchecked_ref())
            .ok()?;
        Some(listeners)
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DismissListeners {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keyup", self.on_keyup.as_ref().unchecked_ref());
    }
}
