/*!
# `NOT <condition>`

## Purpose
The opposite of a condition.

## Example
```text
1 IF NOT FALSE JUMP 3
2 SAY "NOT REACHED"
3 SAY "REACHED"
4 END
```

*/
