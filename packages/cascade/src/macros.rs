#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code = $err;
                soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
        if ($assert) {
            Ok(())
        } else {
            let error_code = $err;
            soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
            soroban_sdk::log!($env, $($arg)*);
            Err(error_code)
        }
        }
    };
}
