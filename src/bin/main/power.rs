use esp_hal::{
    gpio::RtcPin,
    peripherals::{GPIO12, LPWR},
    rtc_cntl::{
        Rtc,
        sleep::{RtcioWakeupSource, WakeupLevel},
    },
};

/// Final shutdown path; pressing OK wakes the device back up.
pub(super) fn enter_deep_sleep() -> ! {
    let mut rtc = Rtc::new(unsafe { LPWR::steal() });
    let mut wake_ok = unsafe { GPIO12::steal() };
    let mut wake_pins: [(&mut dyn RtcPin, WakeupLevel); 1] = [(&mut wake_ok, WakeupLevel::Low)];
    let wake_source = RtcioWakeupSource::new(&mut wake_pins);

    rtc.sleep_deep(&[&wake_source]);
}
