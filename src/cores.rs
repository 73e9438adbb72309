//! Host introspection.

/// Number of logical CPUs available to this process.
pub fn available_cores() -> usize {
    num_cpus::get()
}
