#![cfg(windows)]

use windows::Win32::{
    Foundation::{BOOL, HWND, LPARAM, RECT, TRUE},
    System::Threading::GetCurrentProcessId,
    UI::WindowsAndMessaging::{
        EnumWindows, GetClientRect, GetForegroundWindow, GetWindow, GetWindowLongPtrW,
        GetWindowRect, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
        IsWindow, IsWindowVisible, GWL_EXSTYLE, GWL_STYLE, GW_HWNDPREV, WS_CHILD,
        WS_EX_TOOLWINDOW,
    },
};

use crate::bounds::Rect;

fn rect_from_win32(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowImpl(HWND);

// HWND is a plain identifier; every query below goes through the window manager,
// which is safe to call from any thread.
unsafe impl Send for WindowImpl {}
unsafe impl Sync for WindowImpl {}

impl WindowImpl {
    pub fn from_raw(raw: isize) -> Self {
        Self(HWND(raw as *mut _))
    }

    pub fn raw(&self) -> isize {
        self.0 .0 as isize
    }

    /// Top-level, visible application windows owned by other processes.
    pub fn list() -> Vec<Self> {
        struct EnumContext {
            list: Vec<WindowImpl>,
            current_process_id: u32,
        }

        unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
            let context = unsafe { &mut *(lparam.0 as *mut EnumContext) };

            if is_window_listable(hwnd, context.current_process_id) {
                context.list.push(WindowImpl(hwnd));
            }

            TRUE
        }

        let mut context = EnumContext {
            list: vec![],
            current_process_id: unsafe { GetCurrentProcessId() },
        };

        unsafe {
            let _ = EnumWindows(
                Some(enum_windows_proc),
                LPARAM(std::ptr::addr_of_mut!(context) as isize),
            );
        }

        tracing::trace!("enumerated {} candidate windows", context.list.len());
        context.list
    }

    pub fn foreground() -> Option<Self> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0.is_null() {
            None
        } else {
            Some(Self(hwnd))
        }
    }

    pub fn is_valid(&self) -> bool {
        unsafe { IsWindow(self.0).as_bool() }
    }

    pub fn is_visible(&self) -> bool {
        unsafe { IsWindowVisible(self.0).as_bool() }
    }

    /// Window rectangle in screen coordinates, including invisible resize borders.
    pub fn window_rect(&self) -> Option<Rect> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(self.0, &mut rect).ok()? };
        Some(rect_from_win32(rect))
    }

    /// Client rectangle; origin is always (0, 0), only the size is meaningful.
    pub fn client_rect(&self) -> Option<Rect> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(self.0, &mut rect).ok()? };
        Some(rect_from_win32(rect))
    }

    /// The window directly above this one in z-order.
    pub fn window_above(&self) -> Option<Self> {
        match unsafe { GetWindow(self.0, GW_HWNDPREV) } {
            Ok(hwnd) if !hwnd.0.is_null() => Some(Self(hwnd)),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<String> {
        let len = unsafe { GetWindowTextLengthW(self.0) };
        if len <= 0 {
            return Some(String::new());
        }

        let mut name = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(self.0, &mut name) };
        if copied <= 0 {
            return Some(String::new());
        }

        String::from_utf16(&name[..copied as usize]).ok()
    }
}

fn is_window_listable(hwnd: HWND, current_process_id: u32) -> bool {
    unsafe {
        if !IsWindowVisible(hwnd).as_bool() {
            return false;
        }

        let mut process_id = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut process_id));
        if process_id == current_process_id {
            return false;
        }

        let styles = GetWindowLongPtrW(hwnd, GWL_STYLE);
        let ex_styles = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);

        if (ex_styles & WS_EX_TOOLWINDOW.0 as isize) != 0 {
            return false;
        }
        if (styles & WS_CHILD.0 as isize) != 0 {
            return false;
        }

        true
    }
}
