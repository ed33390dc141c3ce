//! Entry point: card grid construction and event wiring.

use std::rc::Rc;

use catalog::StyleDescriptor;
use engine::{Camera, LngLat, MapEvent};
use panels::{FollowUp, PanelGrid, PanelId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::adapter::MapboxMap;
use crate::mapbox;

const ACCESS_TOKEN: &str =
    "pk.eyJ1IjoiZXZhbmRhcHBsZWdhdGUiLCJhIjoiY2tmbzA1cWM1MWozeTM4cXV4eHUwMzFhdiJ9.Z5f9p8jJD_N1MQwycF2NEw";
const GRID_ELEMENT_ID: &str = "map-grid";
/// Panels at and past this index get the sky-flavored card styling.
const SKY_CARD_FROM_INDEX: usize = 7;

fn initial_camera() -> Camera {
    Camera::new(LngLat::new(-71.0, 43.5), 5.5)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mapbox::set_access_token(ACCESS_TOKEN)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let grid_el = document
        .get_element_by_id(GRID_ELEMENT_ID)
        .ok_or_else(|| JsValue::from_str("missing #map-grid element"))?;

    let mut grid = PanelGrid::new();
    let mut handles = Vec::new();
    for (index, descriptor) in catalog::builtin().into_iter().enumerate() {
        let mount = make_card(&document, &grid_el, &descriptor, index)?;
        let map = create_map(&mount, &descriptor)?;
        let handle = map.clone();
        let id = grid.add_panel(descriptor, MapboxMap::new(map));
        handles.push((id, handle));
    }

    let grid = Rc::new(grid);
    for (id, map) in &handles {
        wire_events(grid.clone(), *id, map);
    }

    let resize_grid = grid.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || resize_grid.resize_all());
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    Ok(())
}

/// One `article.map-card` per catalog entry, mirroring the page
/// markup: map mount, numbered label, style-locator caption.
fn make_card(
    document: &web_sys::Document,
    grid_el: &web_sys::Element,
    descriptor: &StyleDescriptor,
    index: usize,
) -> Result<web_sys::Element, JsValue> {
    let card = document.create_element("article")?;
    card.set_class_name(if index >= SKY_CARD_FROM_INDEX {
        "map-card map-card--sky"
    } else {
        "map-card"
    });

    let mount = document.create_element("div")?;
    mount.set_class_name("map");
    mount.set_id(&format!("map-{}", descriptor.id));

    let label = document.create_element("span")?;
    label.set_class_name("map-label");
    label.set_text_content(Some(&format!(
        "{}. {}",
        index + 1,
        display_label(&descriptor.label)
    )));

    let caption = document.create_element("span")?;
    caption.set_class_name("map-style-url");
    caption.set_text_content(Some(&descriptor.style_url));

    card.append_child(&mount)?;
    card.append_child(&label)?;
    card.append_child(&caption)?;
    grid_el.append_child(&card)?;
    Ok(mount)
}

/// First letter capitalized, rest lowered.
fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn create_map(
    mount: &web_sys::Element,
    descriptor: &StyleDescriptor,
) -> Result<mapbox::Map, JsValue> {
    let camera = initial_camera();
    let options = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| -> Result<(), JsValue> {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), value)?;
        Ok(())
    };
    set("container", mount.as_ref())?;
    set("style", &JsValue::from_str(&descriptor.style_url))?;
    let center = js_sys::Array::of2(&camera.center.lng.into(), &camera.center.lat.into());
    set("center", center.as_ref())?;
    set("zoom", &camera.zoom.into())?;
    set("bearing", &camera.bearing.into())?;
    set("pitch", &camera.pitch.into())?;
    set("attributionControl", &JsValue::FALSE)?;
    set("dragRotate", &JsValue::TRUE)?;
    set("pitchWithRotate", &JsValue::TRUE)?;

    let map = mapbox::Map::new(&options);

    let attribution = js_sys::Object::new();
    js_sys::Reflect::set(
        &attribution,
        &JsValue::from_str("compact"),
        &JsValue::TRUE,
    )?;
    let control = mapbox::AttributionControl::new_attribution(&attribution.into());
    map.add_control(control.as_ref(), "bottom-right");

    Ok(map)
}

/// Subscribe the five engine notifications and route them into the grid.
fn wire_events(grid: Rc<PanelGrid<MapboxMap>>, id: PanelId, map: &mapbox::Map) {
    let g = grid.clone();
    let on_move = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        g.handle_event(id, MapEvent::Move);
    });
    map.on("move", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let g = grid.clone();
    let on_load = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        if let Some(follow_up) = g.handle_event(id, MapEvent::Load) {
            schedule(g.clone(), follow_up);
        }
    });
    map.on("load", on_load.as_ref().unchecked_ref());
    on_load.forget();

    let g = grid.clone();
    let on_style_load = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
        if let Some(follow_up) = g.handle_event(id, MapEvent::StyleLoad) {
            schedule(g.clone(), follow_up);
        }
    });
    map.on("style.load", on_style_load.as_ref().unchecked_ref());
    on_style_load.forget();

    let g = grid.clone();
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let message = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
            .ok()
            .map(|e| {
                js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
                    .unwrap_or_else(|| format!("{e:?}"))
            })
            .unwrap_or_else(|| "unknown engine error".to_string());
        g.handle_event(id, MapEvent::Error(message));
    });
    map.on("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let g = grid;
    let on_image_missing = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let image = js_sys::Reflect::get(&event, &JsValue::from_str("id"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        g.handle_event(id, MapEvent::StyleImageMissing(image));
    });
    map.on("styleimagemissing", on_image_missing.as_ref().unchecked_ref());
    on_image_missing.forget();
}

/// Map a grid follow-up onto a browser timer.
fn schedule(grid: Rc<PanelGrid<MapboxMap>>, follow_up: FollowUp) {
    let FollowUp::TerrainGrace { panel, delay_ms } = follow_up;
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut()>::new(move || grid.grace_elapsed(panel));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .is_err()
    {
        console::warn_1(&JsValue::from_str("failed to schedule terrain grace timer"));
    }
    callback.forget();
}
