//! Board pin assignment
//!
//! | Function            | GPIO | Notes                           |
//! |---------------------|------|---------------------------------|
//! | Host UART TX        | 0    | UART0                           |
//! | Host UART RX        | 1    | UART0                           |
//! | Bridge PWM toward A | 2    | PWM slice 1, channel A          |
//! | Bridge PWM toward B | 3    | PWM slice 1, channel B          |
//! | Bridge enable A     | 4    | Active high                     |
//! | Bridge enable B     | 5    | Active high                     |
//! | Emergency stop      | 6    | Pull-up, button to ground       |
//! | Lamp "at A"         | 7    |                                 |
//! | Lamp "at B"         | 8    |                                 |
//! | Lamp "moving"       | 9    |                                 |

use embassy_rp::peripherals::{
    PIN_0, PIN_1, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9, PWM_SLICE1, UART0,
};
use embassy_rp::{Peri, Peripherals};

/// Host serial link
pub struct SerialPeripherals {
    pub uart: Peri<'static, UART0>,
    pub tx: Peri<'static, PIN_0>,
    pub rx: Peri<'static, PIN_1>,
}

/// Motor bridge outputs
pub struct BridgePeripherals {
    pub slice: Peri<'static, PWM_SLICE1>,
    pub pwm_toward_a: Peri<'static, PIN_2>,
    pub pwm_toward_b: Peri<'static, PIN_3>,
    pub enable_a: Peri<'static, PIN_4>,
    pub enable_b: Peri<'static, PIN_5>,
}

/// Indicator lamp outputs
pub struct LampPeripherals {
    pub at_a: Peri<'static, PIN_7>,
    pub at_b: Peri<'static, PIN_8>,
    pub moving: Peri<'static, PIN_9>,
}

/// Peripherals used by the controller, grouped by function
pub struct BoardPeripherals {
    pub serial: SerialPeripherals,
    pub bridge: BridgePeripherals,
    pub estop: Peri<'static, PIN_6>,
    pub lamps: LampPeripherals,
}

impl BoardPeripherals {
    /// Split the embassy peripherals into board functions
    pub fn from_peripherals(p: Peripherals) -> Self {
        Self {
            serial: SerialPeripherals {
                uart: p.UART0,
                tx: p.PIN_0,
                rx: p.PIN_1,
            },
            bridge: BridgePeripherals {
                slice: p.PWM_SLICE1,
                pwm_toward_a: p.PIN_2,
                pwm_toward_b: p.PIN_3,
                enable_a: p.PIN_4,
                enable_b: p.PIN_5,
            },
            estop: p.PIN_6,
            lamps: LampPeripherals {
                at_a: p.PIN_7,
                at_b: p.PIN_8,
                moving: p.PIN_9,
            },
        }
    }
}
