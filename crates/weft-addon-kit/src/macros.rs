#[macro_export]
macro_rules! diagnosed_error {
    ($($arg:tt)*) => {{
        use $crate::types::diagnostics::Diagnostic;

        let res = format_args!($($arg)*).to_string();
        Diagnostic::error_from_string(res)
    }};
}

#[macro_export]
macro_rules! define_operation {
    ($matcher:expr => {
        name: $op_name:expr,
        documentation: $doc:expr,
        inputs: [$($input_name:ident: { documentation: $input_doc:expr, typing: $input_ts:expr, optional: $optional:expr }),*],
    }) => {
        {
            use $crate::types::operations::{OperationInput, OperationSpecification};

            OperationSpecification {
                name: String::from($op_name),
                matcher: String::from($matcher),
                documentation: String::from($doc),
                inputs: vec![$(OperationInput {
                    name: String::from(stringify!($input_name)),
                    documentation: String::from($input_doc),
                    typing: $input_ts,
                    optional: $optional,
                }),*],
            }
        }
    };
}

#[macro_export]
macro_rules! define_function {
    ($func_key:ident => {
        name: $fn_name:expr,
        documentation: $doc:expr,
        example: $example:expr,
        inputs: [$($input_name:ident: { documentation: $input_doc:expr, typing: $input_ts:expr $(, optional: $input_opt:expr)? }),*],
        output: { documentation: $output_doc:expr, typing: $output_ts:expr },
    }) => {
        {
            use $crate::types::functions::{FunctionInput, FunctionOutput, FunctionSpecification};

            FunctionSpecification {
                name: String::from($fn_name),
                documentation: String::from($doc),
                inputs: vec![$(FunctionInput {
                    name: String::from(stringify!($input_name)),
                    documentation: String::from($input_doc),
                    typing: $input_ts,
                    optional: {
                        let mut is_optional = false;
                        $(
                            is_optional = $input_opt;
                        )?
                        is_optional
                    },
                }),*],
                output: FunctionOutput {
                    documentation: String::from($output_doc),
                    typing: $output_ts,
                },
                example: String::from($example),
                runner: $func_key::run,
            }
        }
    };
}
