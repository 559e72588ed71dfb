// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator

pub mod types;
pub mod error;
pub mod config;
pub mod routing;
pub mod topology;
pub mod schedule;
pub mod registry;
pub mod capacity;
pub mod simulation;

pub use types::*;
pub use config::SimConfig;
pub use error::SimError;
pub use simulation::NetworkSimulation;

use serde::Serialize;
use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Ack {
    success: bool,
}

#[derive(Serialize)]
struct SentPacket<'a> {
    success: bool,
    packet: &'a SimPacket,
}

#[derive(Serialize)]
struct IntervalAck<'a> {
    success: bool,
    time: &'a str,
}

#[derive(Serialize)]
struct PacketList<'a> {
    packets: &'a [SimPacket],
}

/// Plain JS objects rather than `Map`s, so payloads read naturally client side.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

#[wasm_bindgen]
impl NetworkSimulation {
    /// Reference backbone and timetable, destinations drawn from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<NetworkSimulation, JsError> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Ok(NetworkSimulation::with_config(
            SimConfig::reference().with_seed(seed as u64),
        )?)
    }

    /// Build from a JSON config document; `seed` overrides the document's.
    pub fn from_config_json(json: &str, seed: u32) -> Result<NetworkSimulation, JsError> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config = SimConfig::from_json(json)?.with_seed(seed as u64);
        Ok(NetworkSimulation::with_config(config)?)
    }

    pub fn get_network(&self) -> Result<JsValue, JsError> {
        to_js(&self.get_network_core())
    }

    /// Accepts `{ nodes, connections }`; either may be omitted.
    pub fn set_network(&mut self, value: JsValue) -> Result<JsValue, JsError> {
        let topology: Topology = serde_wasm_bindgen::from_value(value)?;
        self.set_network_core(topology);
        to_js(&Ack { success: true })
    }

    pub fn send_packet(
        &mut self,
        from: String,
        to: String,
        payload: JsValue,
    ) -> Result<JsValue, JsError> {
        let payload: serde_json::Value = serde_wasm_bindgen::from_value(payload)?;
        let packet = self.send_packet_core(from.into(), to.into(), payload)?;
        to_js(&SentPacket { success: true, packet: &packet })
    }

    /// Reports the label that is current after the step, i.e. the next slot.
    pub fn simulate_interval(&mut self) -> Result<JsValue, JsError> {
        let report = self.simulate_interval_core()?;
        to_js(&IntervalAck { success: true, time: &report.time })
    }

    pub fn get_packets(&self) -> Result<JsValue, JsError> {
        to_js(&PacketList { packets: self.packets() })
    }

    pub fn advance(&mut self) -> Result<JsValue, JsError> {
        let packets = self.advance_core();
        to_js(&PacketList { packets: &packets })
    }

    pub fn get_link_loads(&self) -> Result<JsValue, JsError> {
        to_js(self.link_loads())
    }

    pub fn get_stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.stats())
    }

    /// Reset simulation to its construction state
    pub fn reset(&mut self) -> Result<(), JsError> {
        Ok(self.reset_core()?)
    }
}
