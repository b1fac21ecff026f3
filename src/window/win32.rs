// Win32 implementation of the window system capability

use crate::window::info::{Rect, ScreenSize, WindowHandle};
use crate::window::system::{PositionFlags, RawWindow, WindowSystem, ZOrder};
use winapi::shared::minwindef::{BOOL, DWORD, FALSE, LPARAM, TRUE};
use winapi::shared::windef::{HWND, RECT};
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::OpenProcess;
use winapi::um::winbase::QueryFullProcessImageNameW;
use winapi::um::winnt::PROCESS_QUERY_LIMITED_INFORMATION;
use winapi::um::winuser::*;

/// Talks to user32 directly. Holds no state; every call hits the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }

    fn hwnd(handle: WindowHandle) -> HWND {
        handle.0 as HWND
    }

    pub fn get_window_title(hwnd: HWND) -> String {
        unsafe {
            let len = GetWindowTextLengthW(hwnd);
            if len <= 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32);
            if copied > 0 {
                String::from_utf16_lossy(&buffer[..copied as usize])
            } else {
                String::new()
            }
        }
    }

    pub fn get_window_rect(hwnd: HWND) -> Option<Rect> {
        unsafe {
            let mut rect = RECT {
                left: 0,
                top: 0,
                right: 0,
                bottom: 0,
            };
            if GetWindowRect(hwnd, &mut rect) != 0 {
                Some(Rect::from_bounds(rect.left, rect.top, rect.right, rect.bottom))
            } else {
                None
            }
        }
    }

    /// Executable name of the owning process without path or extension,
    /// or an empty string if the process cannot be opened.
    pub fn get_process_name(hwnd: HWND) -> String {
        let mut process_id: DWORD = 0;
        unsafe {
            GetWindowThreadProcessId(hwnd, &mut process_id);
        }
        if process_id == 0 {
            return String::new();
        }

        unsafe {
            let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, FALSE, process_id);
            if process.is_null() {
                return String::new();
            }
            let mut buffer = [0u16; 1024];
            let mut size = buffer.len() as DWORD;
            let ok = QueryFullProcessImageNameW(process, 0, buffer.as_mut_ptr(), &mut size);
            CloseHandle(process);
            if ok == 0 {
                return String::new();
            }
            let path = String::from_utf16_lossy(&buffer[..size as usize]);
            std::path::Path::new(&path)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        }
    }
}

struct EnumState {
    windows: Vec<RawWindow>,
    visited: usize,
}

unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = &mut *(lparam as *mut EnumState);
    state.visited += 1;

    if IsWindowVisible(hwnd) == 0 {
        return TRUE;
    }

    let title = Win32WindowSystem::get_window_title(hwnd);
    if title.is_empty() {
        return TRUE;
    }

    state.windows.push(RawWindow {
        handle: WindowHandle(hwnd as u64),
        title,
        process_name: Win32WindowSystem::get_process_name(hwnd),
        rect: Win32WindowSystem::get_window_rect(hwnd),
    });
    TRUE
}

impl WindowSystem for Win32WindowSystem {
    fn enumerate_windows(&self) -> Vec<RawWindow> {
        let mut state = EnumState {
            windows: Vec::new(),
            visited: 0,
        };
        unsafe {
            EnumWindows(
                Some(enum_windows_proc),
                &mut state as *mut EnumState as LPARAM,
            );
        }
        log::debug!(
            "EnumWindows visited {} windows, {} visible with a title",
            state.visited,
            state.windows.len()
        );
        state.windows
    }

    fn is_valid(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindow(Self::hwnd(handle)) != 0 }
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect> {
        Self::get_window_rect(Self::hwnd(handle))
    }

    fn set_position(
        &self,
        handle: WindowHandle,
        rect: Rect,
        z_order: ZOrder,
        flags: PositionFlags,
    ) -> bool {
        let insert_after = match z_order {
            ZOrder::Top => HWND_TOP,
            ZOrder::TopMost => HWND_TOPMOST,
            ZOrder::NoTopMost => HWND_NOTOPMOST,
        };
        unsafe {
            SetWindowPos(
                Self::hwnd(handle),
                insert_after,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags.bits(),
            ) != 0
        }
    }

    fn move_resize(&self, handle: WindowHandle, rect: Rect) -> bool {
        unsafe {
            MoveWindow(
                Self::hwnd(handle),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                TRUE,
            ) != 0
        }
    }

    fn is_minimized(&self, handle: WindowHandle) -> bool {
        unsafe { IsIconic(Self::hwnd(handle)) != 0 }
    }

    fn restore(&self, handle: WindowHandle) -> bool {
        // ShowWindow returns the previous visibility, not success
        unsafe {
            ShowWindow(Self::hwnd(handle), SW_RESTORE);
            IsIconic(Self::hwnd(handle)) == 0
        }
    }

    fn bring_to_foreground(&self, handle: WindowHandle) -> bool {
        unsafe { SetForegroundWindow(Self::hwnd(handle)) != 0 }
    }

    fn bring_to_top(&self, handle: WindowHandle) -> bool {
        unsafe { BringWindowToTop(Self::hwnd(handle)) != 0 }
    }

    fn primary_screen_size(&self) -> Option<ScreenSize> {
        let size = unsafe {
            ScreenSize::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN))
        };
        if size.is_usable() {
            Some(size)
        } else {
            None
        }
    }
}
