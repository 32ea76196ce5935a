//! Registry access under HKEY_CLASSES_ROOT

use windows::core::{HSTRING, PCWSTR, PWSTR};
use windows::Win32::Foundation::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
use windows::Win32::System::Registry::{
    RegCloseKey, RegEnumKeyExW, RegGetValueW, RegOpenKeyExW, HKEY, HKEY_CLASSES_ROOT, KEY_READ,
    RRF_RT_REG_SZ,
};

use crate::domain::repositories::RegistrationStore;

/// Longest key name the registry allows, plus the terminator
const MAX_KEY_NAME: usize = 256;

/// Open registry key, closed on drop
struct RegKey(HKEY);

impl RegKey {
    fn open(path: &str) -> Option<Self> {
        let wide = HSTRING::from(path);
        let mut key = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CLASSES_ROOT,
                PCWSTR(wide.as_ptr()),
                0,
                KEY_READ,
                &mut key,
            )
        };
        if status == ERROR_SUCCESS {
            Some(Self(key))
        } else {
            None
        }
    }

    fn subkey_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut buffer = [0u16; MAX_KEY_NAME];

        for index in 0.. {
            let mut len = buffer.len() as u32;
            let status = unsafe {
                RegEnumKeyExW(
                    self.0,
                    index,
                    PWSTR(buffer.as_mut_ptr()),
                    &mut len,
                    None,
                    PWSTR::null(),
                    None,
                    None,
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status != ERROR_SUCCESS {
                crate::log!("RegEnumKeyExW #{} failed: {:?}", index, status);
                break;
            }
            names.push(String::from_utf16_lossy(&buffer[..len as usize]));
        }

        names
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

/// [`RegistrationStore`] over the live class registry
#[derive(Default)]
pub struct Win32RegistrationStore;

impl Win32RegistrationStore {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationStore for Win32RegistrationStore {
    fn subkeys(&self, path: &str) -> Option<Vec<String>> {
        RegKey::open(path).map(|key| key.subkey_names())
    }

    fn default_value(&self, path: &str) -> Option<String> {
        let wide = HSTRING::from(path);
        unsafe {
            // First call sizes the value, second reads it
            let mut size = 0u32;
            let status = RegGetValueW(
                HKEY_CLASSES_ROOT,
                PCWSTR(wide.as_ptr()),
                PCWSTR::null(),
                RRF_RT_REG_SZ,
                None,
                None,
                Some(&mut size),
            );
            if status != ERROR_SUCCESS || size == 0 {
                return None;
            }

            let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
            let mut size = (buffer.len() * 2) as u32;
            let status = RegGetValueW(
                HKEY_CLASSES_ROOT,
                PCWSTR(wide.as_ptr()),
                PCWSTR::null(),
                RRF_RT_REG_SZ,
                None,
                Some(buffer.as_mut_ptr() as *mut _),
                Some(&mut size),
            );
            if status != ERROR_SUCCESS {
                return None;
            }

            let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
            Some(String::from_utf16_lossy(&buffer[..len]))
        }
    }
}
