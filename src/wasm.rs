//! Bindings for a browser front end. The front end owns drawing and input; it drives a [`WasmDungeon`] and reads rooms back out of it.

use std::num::NonZero;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::attribute::Attribute;
use crate::location::{Coord, Location};
use crate::shape::SquareStep;
use crate::Dungeon;

/// A [`Dungeon`] handle for JavaScript.
#[wasm_bindgen]
pub struct WasmDungeon {
    inner: Dungeon,
}

#[wasm_bindgen]
impl WasmDungeon {
    /// Construct a `size` by `size` dungeon. Throws if `size` is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmDungeon, JsError> {
        let size = NonZero::new(size).ok_or_else(|| JsError::new("dungeon size must be nonzero"))?;
        Ok(Self { inner: Dungeon::new(size) })
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Move the cursor one room; `direction` is `left`, `right`, `up` or `down`.
    #[wasm_bindgen(js_name = moveSelection)]
    pub fn move_selection(&mut self, direction: &str) -> Result<(), JsError> {
        let step: SquareStep = direction.parse()?;
        self.inner.move_selection(step);
        Ok(())
    }

    pub fn select(&mut self, x: Coord, y: Coord) {
        self.inner.select(Location(x, y));
    }

    pub fn explore(&mut self, pit: bool, arrow: bool, dragon: bool) {
        self.inner.explore(pit, arrow, dragon);
    }

    #[wasm_bindgen(js_name = foundAPit)]
    pub fn found_a_pit(&mut self) {
        self.inner.found_a_pit();
    }

    /// `[x, y]` of the selected room.
    pub fn selected(&self) -> Array {
        let Location(x, y) = self.inner.selected();
        Array::of2(&JsValue::from(x as f64), &JsValue::from(y as f64))
    }

    pub fn visited(&self, x: Coord, y: Coord) -> bool {
        self.inner.get_room(Location(x, y)).visited()
    }

    #[wasm_bindgen(js_name = isUndetermined)]
    pub fn is_undetermined(&self, x: Coord, y: Coord) -> bool {
        self.inner.get_room(Location(x, y)).is_undetermined()
    }

    /// Sensed and deduced states of one attribute, as `[sensed, deduced]` strings.
    pub fn states(&self, x: Coord, y: Coord, attribute: &str) -> Result<Array, JsError> {
        let attribute: Attribute = attribute.parse()?;
        let room = self.inner.get_room(Location(x, y));
        Ok(Array::of2(
            &JsValue::from_str(&room.sensed(attribute).to_string()),
            &JsValue::from_str(&room.deduced(attribute).to_string()),
        ))
    }

    /// Visible hints of a room as `["Pit", "High"]` style pairs, in attribute order.
    pub fn hints(&self, x: Coord, y: Coord) -> Array {
        self.inner.get_room(Location(x, y)).hints()
            .map(|(attribute, severity)| Array::of2(
                &JsValue::from_str(&attribute.to_string()),
                &JsValue::from_str(&severity.to_string()),
            ))
            .collect()
    }

    /// The text rendering of the whole dungeon.
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}
