use error_chain::*;

error_chain! {
    errors {
        /// Requested maze dimensions that fail validation. No grid is
        /// produced; the caller must supply corrected input.
        InvalidConfiguration(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: rows and columns must both be positive",
                    rows, columns)
        }
    }
}
