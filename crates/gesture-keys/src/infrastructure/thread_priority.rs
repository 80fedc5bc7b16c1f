//! Best-effort scheduling boost for the dispatch threads.
//!
//! - Windows: `SetThreadPriority(GetCurrentThread(), THREAD_PRIORITY_HIGHEST)`.
//! - macOS: `pthread_set_qos_class_self_np(QOS_CLASS_USER_INTERACTIVE, 0)`.
//! - Elsewhere: not attempted (raising priority needs privileges on Linux).

/// Raises the calling thread's priority.  Returns `true` if the OS accepted.
pub fn raise_current_thread() -> bool {
    #[cfg(target_os = "windows")]
    {
        use windows::Win32::System::Threading::{
            GetCurrentThread, SetThreadPriority, THREAD_PRIORITY_HIGHEST,
        };
        // SAFETY: GetCurrentThread returns a pseudo-handle that needs no closing.
        unsafe { SetThreadPriority(GetCurrentThread(), THREAD_PRIORITY_HIGHEST) }.is_ok()
    }

    #[cfg(target_os = "macos")]
    {
        use libc::{pthread_set_qos_class_self_np, qos_class_t};
        // SAFETY: only affects the calling thread; returns 0 on success.
        unsafe { pthread_set_qos_class_self_np(qos_class_t::QOS_CLASS_USER_INTERACTIVE, 0) == 0 }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_current_thread_follows_platform_support() {
        // Act – on a throwaway thread so the test runner's own is untouched.
        let raised = std::thread::spawn(raise_current_thread).join().unwrap();

        // Assert
        let supported = cfg!(any(target_os = "windows", target_os = "macos"));
        assert_eq!(raised, supported);
    }
}
