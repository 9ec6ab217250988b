use marshal_fixtures::{
    FreeInt32Array, GetInt32ArrayZeroToNine, IsInt32ArrayZeroToNine, WriteToInt32Array,
    WriteToInt32Arrays,
};
use marshal_span::{
    lower_signature, span_from_return, LengthValue, LoweredParameter, LoweredSignature,
    NativeType, Parameter, ReturnType, Signature, SpanMarshalling,
};

fn int_length(value: LengthValue) -> i32 {
    match value {
        LengthValue::Int(length) => length,
        other => panic!("expected an `Int` length, found {other:?}"),
    }
}

fn lower(signature: &Signature) -> LoweredSignature {
    lower_signature(signature).expect("failed to lower fixture signature")
}

#[test]
fn get_int32_array_zero_to_nine() {
    let lowered = lower(&Signature::new("GetInt32ArrayZeroToNine").returns(ReturnType::Span {
        element: NativeType::I32,
        collection_length: Some(10),
    }));
    assert!(lowered.parameters.is_empty());

    let array = GetInt32ArrayZeroToNine();
    let values = unsafe { span_from_return(array, &lowered.return_type) }.unwrap();
    assert_eq!(values, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    unsafe { FreeInt32Array(array) };
}

#[test]
fn is_int32_array_zero_to_nine() {
    let lowered = lower(
        &Signature::new("IsInt32ArrayZeroToNine")
            .returns(ReturnType::Value(NativeType::I32))
            .param(Parameter::span("arr", NativeType::I32).with_marshalling(None)),
    );
    assert!(matches!(
        lowered.parameters.as_slice(),
        [LoweredParameter::Pointer { mutable: false, .. }]
    ));
    assert!(lowered.length_arguments(&[10]).unwrap().is_empty());

    let values = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(unsafe { IsInt32ArrayZeroToNine(values.as_ptr()) }, 1);
}

#[test]
fn write_to_int32_array() {
    let lowered = lower(
        &Signature::new("WriteToInt32Array").param(
            Parameter::span_mut("dest", NativeType::I32)
                .with_marshalling(Some(SpanMarshalling::default())),
        ),
    );

    let mut dest = [-1; 6];
    let lengths = lowered.length_arguments(&[dest.len()]).unwrap();
    let [dest_len] = lengths.as_slice() else {
        panic!("expected a single length argument, found {lengths:?}");
    };

    unsafe { WriteToInt32Array(dest.as_mut_ptr(), int_length(*dest_len)) };
    assert_eq!(dest, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn write_to_int32_arrays() {
    let lowered = lower(
        &Signature::new("WriteToInt32Arrays")
            .param(
                Parameter::span_mut("destA", NativeType::I32)
                    .with_marshalling(Some(SpanMarshalling::default())),
            )
            .param(
                Parameter::span_mut("destB", NativeType::I32)
                    .with_marshalling(Some(SpanMarshalling::before(0))),
            ),
    );
    assert_eq!(
        lowered
            .parameters
            .iter()
            .map(LoweredParameter::name)
            .collect::<Vec<_>>(),
        vec!["destA", "destALength", "destBLength", "destB"]
    );

    let mut dest_a = [-1; 5];
    let mut dest_b = [-1; 3];
    let lengths = lowered
        .length_arguments(&[dest_a.len(), dest_b.len()])
        .unwrap();
    let [len_a, len_b] = lengths.as_slice() else {
        panic!("expected two length arguments, found {lengths:?}");
    };

    unsafe {
        WriteToInt32Arrays(
            dest_a.as_mut_ptr(),
            int_length(*len_a),
            int_length(*len_b),
            dest_b.as_mut_ptr(),
        );
    };

    assert_eq!(dest_a, [0, 1, 2, 3, 4]);
    assert_eq!(dest_b, [3, 2, 1]);
}
