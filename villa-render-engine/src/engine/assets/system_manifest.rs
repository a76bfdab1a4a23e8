use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One point on the daily power output curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerSample {
    pub time: String,
    pub power_kw: f32,
}

/// Nameplate data shown in the inverter dialog's specification block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverterSpec {
    pub model: String,
    pub rated_power_kw: f32,
    pub efficiency_percent: f32,
    pub installed: String,
}

/// Live-looking readouts for the dialog header cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverterReadout {
    pub output_kw: f32,
    pub daily_yield_kwh: f32,
    pub status: String,
    pub temperature_c: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub connected: bool,
    pub address: String,
}

/// Equipment readouts for the viewer as a Bevy asset. Mirrors the JSON
/// structure exactly; inserted as a resource once loaded.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SystemManifest {
    pub site_name: String,
    pub readout: InverterReadout,
    pub spec: InverterSpec,
    pub network: NetworkStatus,
    pub power_curve: Vec<PowerSample>,
}

impl SystemManifest {
    /// Highest sample on the curve, used to scale the dialog's bar chart.
    pub fn peak_power_kw(&self) -> f32 {
        self.power_curve
            .iter()
            .map(|sample| sample.power_kw)
            .fold(0.0, f32::max)
    }
}

impl Default for SystemManifest {
    /// Built-in figures used when the manifest asset is missing or malformed.
    fn default() -> Self {
        Self {
            site_name: "Solar Villa".to_string(),
            readout: InverterReadout {
                output_kw: 3.8,
                daily_yield_kwh: 18.5,
                status: "Normal".to_string(),
                temperature_c: 42.0,
            },
            spec: InverterSpec {
                model: "SX-8000TL".to_string(),
                rated_power_kw: 8.0,
                efficiency_percent: 97.8,
                installed: "2023-06-15".to_string(),
            },
            network: NetworkStatus {
                connected: true,
                address: "192.168.1.105".to_string(),
            },
            power_curve: vec![
                PowerSample { time: "06:00".to_string(), power_kw: 0.2 },
                PowerSample { time: "08:00".to_string(), power_kw: 1.5 },
                PowerSample { time: "10:00".to_string(), power_kw: 3.2 },
                PowerSample { time: "12:00".to_string(), power_kw: 3.8 },
                PowerSample { time: "14:00".to_string(), power_kw: 3.5 },
                PowerSample { time: "16:00".to_string(), power_kw: 2.1 },
                PowerSample { time: "18:00".to_string(), power_kw: 0.8 },
                PowerSample { time: "20:00".to_string(), power_kw: 0.1 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_curve_covers_the_day() {
        let manifest = SystemManifest::default();
        assert_eq!(manifest.power_curve.len(), 8);
        assert_eq!(manifest.power_curve.first().unwrap().time, "06:00");
        assert_eq!(manifest.power_curve.last().unwrap().time, "20:00");
        assert!((manifest.peak_power_kw() - 3.8).abs() < f32::EPSILON);
    }

    #[test]
    fn peak_power_of_empty_curve_is_zero() {
        let mut manifest = SystemManifest::default();
        manifest.power_curve.clear();
        assert_eq!(manifest.peak_power_kw(), 0.0);
    }

    #[test]
    fn manifest_parses_from_json() {
        let json = r#"{
            "site_name": "Test Site",
            "readout": {
                "output_kw": 1.0,
                "daily_yield_kwh": 2.0,
                "status": "Normal",
                "temperature_c": 40.0
            },
            "spec": {
                "model": "X-1",
                "rated_power_kw": 5.0,
                "efficiency_percent": 96.5,
                "installed": "2024-01-01"
            },
            "network": { "connected": false, "address": "10.0.0.2" },
            "power_curve": [
                { "time": "12:00", "power_kw": 4.2 }
            ]
        }"#;

        let manifest: SystemManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.site_name, "Test Site");
        assert!(!manifest.network.connected);
        assert_eq!(manifest.power_curve.len(), 1);
        assert!((manifest.peak_power_kw() - 4.2).abs() < f32::EPSILON);
    }
}
