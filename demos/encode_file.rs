use bitvec::prelude::*;
use prefixcode::{Decoder, Encoder, FrequencyTable, SerializableDecoder, SerializableEncoder, Tree};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

#[derive(Serialize, Deserialize)]
struct PrefixCodeSerialized {
    data: Box<[usize]>,
    bit_len: usize,
    encoder: SerializableEncoder,
    decoder: SerializableDecoder,
}

impl PrefixCodeSerialized {
    fn new(bv: BitVec, e: &Encoder, d: &Decoder) -> Self {
        let bl = bv.len();

        Self {
            data: bv.into_boxed_bitslice().into_boxed_slice(),
            bit_len: bl,
            encoder: e.into(),
            decoder: d.into(),
        }
    }

    fn into_parts(self) -> Result<(BitVec, Encoder, Decoder), prefixcode::Error> {
        let Self { data, bit_len, encoder, decoder } = self;

        let mut bv = BitBox::from_boxed_slice(data).into_bitvec();
        bv.resize(bit_len, false);

        Ok((bv, encoder.into(), decoder.try_into()?))
    }
}

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let table = FrequencyTable::count(input_bytes.iter().copied());
        let tree = Tree::build(&table).unwrap();
        let (e, d) = tree.into_encoder_decoder_pair();

        let encoded = e.encode(input_bytes.iter().copied()).unwrap();
        let packed = PrefixCodeSerialized::new(encoded, &e, &d);
        let data = rmp_serde::to_vec(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: PrefixCodeSerialized = rmp_serde::from_slice(&file_data).unwrap();
        let (enc, _, d) = packed.into_parts().unwrap();
        let decoded = d.decode(&enc).unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
