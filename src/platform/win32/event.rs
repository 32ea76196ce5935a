//! Win32 message loop

use windows::Win32::UI::WindowsAndMessaging::*;

/// Pump messages for this thread until WM_QUIT
pub fn run_message_loop() {
    unsafe {
        let mut msg = MSG::default();
        loop {
            let ret = GetMessageW(&mut msg, None, 0, 0);
            if ret.0 <= 0 {
                if ret.0 < 0 {
                    log!("GetMessageW failed, leaving message loop");
                }
                break;
            }

            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// Post a quit message
pub fn post_quit() {
    unsafe {
        PostQuitMessage(0);
    }
}
