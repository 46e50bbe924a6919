use sdun_platform::{Arena, Game};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Stand-in game module. Adopts the arena, stamps a frame counter into
/// its first bytes, and logs a heartbeat once a second.
#[derive(Default)]
pub struct Heartbeat {
    memory: Option<Arena>,
    frames: u64,
}

impl Game for Heartbeat {
    fn init(&mut self, memory: Arena) {
        log::info!("adopted {} bytes of game memory", memory.capacity());
        self.memory = Some(memory);
    }

    fn frame(&mut self) {
        self.frames += 1;
        if let Some(memory) = &mut self.memory {
            memory.as_mut_slice()[..8].copy_from_slice(&self.frames.to_le_bytes());
        }
        if self.frames % 60 == 0 {
            log::info!("{} frames", self.frames);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    sdun_platform::run(Box::new(Heartbeat::default()))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
